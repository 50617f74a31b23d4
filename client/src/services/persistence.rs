//! Saved-session persistence over a key-value store.
//!
//! DESIGN
//! ======
//! One entry under [`STORAGE_KEY`] holds the full ordered list of saved
//! sessions as JSON. The whole list is parsed once at startup; anything that
//! fails to parse is treated as "no saved sessions" rather than an error.
//! The store itself sits behind [`KeyValueStore`] so tests and native builds
//! use an in-memory map while the browser uses `localStorage`.

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;

use pitch::board::{Board, Item, Line, PitchVariant};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The single localStorage key holding the saved-session list.
pub const STORAGE_KEY: &str = "touchline_sessions";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("serialize failed: {0}")]
    Serialize(String),
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Minimal key-value storage seam.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns a [`StoreError`] when the underlying store rejects the write
    /// (quota, unavailable storage).
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store for tests and native builds.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: std::collections::HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Browser `localStorage`.
#[cfg(feature = "hydrate")]
pub struct LocalStore {
    storage: web_sys::Storage,
}

#[cfg(feature = "hydrate")]
impl LocalStore {
    /// Returns `None` outside a browser or when storage is disabled.
    #[must_use]
    pub fn new() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        Some(Self { storage })
    }
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|_| StoreError::Write("localStorage rejected the write".to_owned()))
    }
}

/// A named board snapshot as stored on disk. Field names are the on-disk
/// contract; changing them breaks existing saves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSession {
    pub id: Uuid,
    pub name: String,
    /// Creation time, epoch milliseconds.
    pub created_at: i64,
    pub items: Vec<Item>,
    pub lines: Vec<Line>,
    #[serde(default)]
    pub pitch_variant: PitchVariant,
}

impl SavedSession {
    /// Snapshot `board` under `name`.
    #[must_use]
    pub fn from_board(name: &str, board: &Board, created_at: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            created_at,
            items: board.items.clone(),
            lines: board.lines.clone(),
            pitch_variant: board.pitch,
        }
    }

    /// Rebuild a live board from this save.
    #[must_use]
    pub fn to_board(&self) -> Board {
        Board {
            items: self.items.clone(),
            lines: self.lines.clone(),
            pitch: self.pitch_variant,
        }
    }
}

/// Load every saved session. Parse failures degrade to an empty list.
#[must_use]
pub fn load_sessions(store: &dyn KeyValueStore) -> Vec<SavedSession> {
    let Some(raw) = store.get(STORAGE_KEY) else {
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(sessions) => sessions,
        Err(err) => {
            log::warn!("saved sessions unreadable, starting empty: {err}");
            Vec::new()
        }
    }
}

/// Upsert `save` into `sessions` by name (a save overwrites an existing save
/// of the same name) and write the list back to the store.
///
/// # Errors
///
/// Returns a [`StoreError`] when serialization or the store write fails; the
/// in-memory list is updated either way.
pub fn save_session(
    store: &mut dyn KeyValueStore,
    sessions: &mut Vec<SavedSession>,
    save: SavedSession,
) -> Result<(), StoreError> {
    match sessions.iter_mut().find(|s| s.name == save.name) {
        Some(slot) => *slot = save,
        None => sessions.push(save),
    }
    let raw = serde_json::to_string(sessions).map_err(|e| StoreError::Serialize(e.to_string()))?;
    store.set(STORAGE_KEY, &raw)
}

/// Current wall-clock time in epoch milliseconds.
#[must_use]
pub fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        let Ok(dur) = SystemTime::now().duration_since(UNIX_EPOCH) else {
            return 0;
        };
        i64::try_from(dur.as_millis()).unwrap_or(0)
    }
}
