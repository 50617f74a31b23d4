//! Session orchestrator: the single root object the chrome talks to.
//!
//! DESIGN
//! ======
//! Owns the interaction engine, the session name, the saved-session list,
//! and the coach chat. No ambient globals: every entry point lives here or
//! on the engine it exposes. Interactive actions (pointer protocol, add,
//! rotate, delete, undo/redo) go straight to [`pitch::engine::Engine`];
//! this layer adds the operations that touch an external collaborator —
//! storage, the coach backend, and canvas capture.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use pitch::board::{IdGen, UuidIds};
use pitch::engine::Engine;

use crate::services::coach::CoachService;
use crate::services::export::{self, ExportError};
use crate::services::persistence::{self, KeyValueStore, SavedSession, StoreError};
use crate::state::chat::ChatState;

/// Name given to a session before the user renames it.
pub const DEFAULT_SESSION_NAME: &str = "New Session";

/// A complete editing session.
pub struct Session {
    engine: Engine,
    name: String,
    saved: Vec<SavedSession>,
    chat: ChatState,
    coach: CoachService,
    /// Id source for entities materialized from coach proposals.
    ids: Box<dyn IdGen>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A fresh session over an empty board with random ids.
    #[must_use]
    pub fn new() -> Self {
        Self::with_ids(Box::new(UuidIds), Box::new(UuidIds))
    }

    /// A fresh session with injected id sources (engine entities, applied
    /// coach proposals) for deterministic tests.
    #[must_use]
    pub fn with_ids(engine_ids: Box<dyn IdGen>, sheet_ids: Box<dyn IdGen>) -> Self {
        Self {
            engine: Engine::with_ids(engine_ids),
            name: DEFAULT_SESSION_NAME.to_owned(),
            saved: Vec::new(),
            chat: ChatState::with_greeting(),
            coach: CoachService::default(),
            ids: sheet_ids,
        }
    }

    /// Swap in a different coach service (tests, alternative backends).
    #[must_use]
    pub fn with_coach(mut self, coach: CoachService) -> Self {
        self.coach = coach;
        self
    }

    // --- Accessors ---

    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// The engine, mutably — the chrome drives pointer events and discrete
    /// board actions through this.
    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn saved(&self) -> &[SavedSession] {
        &self.saved
    }

    #[must_use]
    pub fn chat(&self) -> &ChatState {
        &self.chat
    }

    // --- Naming / persistence ---

    /// Rename the session. Not undoable; the name lives outside the board.
    pub fn rename(&mut self, name: &str) {
        self.name = name.to_owned();
    }

    /// Populate the saved list from the store (startup).
    pub fn load_saved_sessions(&mut self, store: &dyn KeyValueStore) {
        self.saved = persistence::load_sessions(store);
    }

    /// Save the current board under the session name, overwriting an
    /// existing save of the same name.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the write fails.
    pub fn save(&mut self, store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
        let save = SavedSession::from_board(&self.name, self.engine.board(), persistence::now_ms());
        persistence::save_session(store, &mut self.saved, save)
    }

    /// Load the saved session at `index`, replacing the live board and
    /// restarting history from it. Returns `false` for a bad index.
    pub fn load_saved(&mut self, index: usize) -> bool {
        let Some(saved) = self.saved.get(index) else {
            return false;
        };
        self.name = saved.name.clone();
        let board = saved.to_board();
        self.engine.load_board(board);
        true
    }

    // --- Coach ---

    /// Send a prompt to the coach and append the reply to the transcript as
    /// one atomic entry. Returns `false` without sending while another
    /// request is pending or when the prompt is blank.
    pub async fn ask_coach(&mut self, query: &str) -> bool {
        if !self.chat.begin(query) {
            return false;
        }
        let advice = self.coach.advise(query, Some(self.name.as_str())).await;
        self.chat.finish(advice);
        true
    }

    /// Apply the tactic sheet attached to transcript entry `index` to the
    /// board. Applying is always an explicit user action — proposals never
    /// reach the board on their own. Returns `false` when the entry has no
    /// sheet.
    pub fn apply_tactic(&mut self, index: usize) -> bool {
        let Some(sheet) = self.chat.tactic_at(index).cloned() else {
            return false;
        };
        let (items, lines) = sheet.into_entities(self.ids.as_mut());
        self.engine.apply_generated(items, lines);
        true
    }

    // --- Export ---

    /// The file name an export of this session would use.
    #[must_use]
    pub fn export_name(&self) -> String {
        export::export_file_name(&self.name)
    }

    /// Export the rendered canvas as a PNG named after the session.
    ///
    /// # Errors
    ///
    /// Returns an [`ExportError`] when capture fails; the session is
    /// unaffected either way.
    pub fn export(&self, canvas_id: &str) -> Result<(), ExportError> {
        export::export_png(canvas_id, &self.name)
    }
}
