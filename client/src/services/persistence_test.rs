#![allow(clippy::float_cmp)]

use super::*;
use pitch::board::ItemKind;
use pitch::coords::Position;

fn board_with_cone() -> Board {
    let mut board = Board::default();
    let mut item = Item::new(Uuid::from_u128(1), ItemKind::Cone);
    item.pos = Position::new(25.0, 75.0);
    board.items.push(item);
    board.pitch = PitchVariant::Half;
    board
}

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_roundtrips_values() {
    let mut store = MemoryStore::default();
    assert!(store.get("k").is_none());
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k").as_deref(), Some("v"));
}

#[test]
fn memory_store_overwrites() {
    let mut store = MemoryStore::default();
    store.set("k", "a").unwrap();
    store.set("k", "b").unwrap();
    assert_eq!(store.get("k").as_deref(), Some("b"));
}

// =============================================================
// load_sessions
// =============================================================

#[test]
fn load_from_empty_store_is_empty() {
    let store = MemoryStore::default();
    assert!(load_sessions(&store).is_empty());
}

#[test]
fn load_corrupt_payload_degrades_to_empty() {
    let mut store = MemoryStore::default();
    store.set(STORAGE_KEY, "definitely not json").unwrap();
    assert!(load_sessions(&store).is_empty());
}

#[test]
fn load_wrong_shape_degrades_to_empty() {
    let mut store = MemoryStore::default();
    store.set(STORAGE_KEY, r#"{"name": "not a list"}"#).unwrap();
    assert!(load_sessions(&store).is_empty());
}

#[test]
fn load_entry_with_bad_item_kind_degrades_to_empty() {
    let mut store = MemoryStore::default();
    let raw = r#"[{"id":"00000000-0000-0000-0000-000000000001","name":"x","createdAt":1,
        "items":[{"id":"00000000-0000-0000-0000-000000000002","kind":"referee",
        "pos":{"x":1.0,"y":1.0},"rotation":0.0}],"lines":[]}]"#;
    store.set(STORAGE_KEY, raw).unwrap();
    assert!(load_sessions(&store).is_empty());
}

// =============================================================
// save_session
// =============================================================

#[test]
fn save_appends_and_survives_reload() {
    let mut store = MemoryStore::default();
    let mut sessions = Vec::new();
    let save = SavedSession::from_board("Rondo", &board_with_cone(), 1234);
    save_session(&mut store, &mut sessions, save.clone()).unwrap();

    assert_eq!(sessions.len(), 1);
    let reloaded = load_sessions(&store);
    assert_eq!(reloaded, vec![save]);
}

#[test]
fn save_same_name_overwrites() {
    let mut store = MemoryStore::default();
    let mut sessions = Vec::new();
    save_session(&mut store, &mut sessions, SavedSession::from_board("Rondo", &Board::default(), 1)).unwrap();
    save_session(&mut store, &mut sessions, SavedSession::from_board("Rondo", &board_with_cone(), 2)).unwrap();

    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].created_at, 2);
    assert_eq!(sessions[0].items.len(), 1);
    assert_eq!(load_sessions(&store).len(), 1);
}

#[test]
fn save_different_names_append_in_order() {
    let mut store = MemoryStore::default();
    let mut sessions = Vec::new();
    save_session(&mut store, &mut sessions, SavedSession::from_board("A", &Board::default(), 1)).unwrap();
    save_session(&mut store, &mut sessions, SavedSession::from_board("B", &Board::default(), 2)).unwrap();
    let names: Vec<String> = load_sessions(&store).into_iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["A", "B"]);
}

// =============================================================
// Wire format
// =============================================================

#[test]
fn saved_session_serializes_camel_case() {
    let save = SavedSession::from_board("Rondo", &board_with_cone(), 99);
    let json = serde_json::to_string(&save).unwrap();
    assert!(json.contains("\"createdAt\":99"));
    assert!(json.contains("\"pitchVariant\":\"half\""));
    assert!(!json.contains("created_at"));
    assert!(!json.contains("pitch_variant"));
}

#[test]
fn saved_session_reserializes_identically() {
    let save = SavedSession::from_board("Rondo", &board_with_cone(), 42);
    let first = serde_json::to_string(&save).unwrap();
    let parsed: SavedSession = serde_json::from_str(&first).unwrap();
    let second = serde_json::to_string(&parsed).unwrap();
    assert_eq!(first, second);
}

#[test]
fn saved_session_missing_pitch_defaults_to_full() {
    let raw = r#"{"id":"00000000-0000-0000-0000-000000000001","name":"x","createdAt":1,
        "items":[],"lines":[]}"#;
    let parsed: SavedSession = serde_json::from_str(raw).unwrap();
    assert_eq!(parsed.pitch_variant, PitchVariant::Full);
}

// =============================================================
// Board conversion
// =============================================================

#[test]
fn board_roundtrips_through_a_save() {
    let board = board_with_cone();
    let save = SavedSession::from_board("Rondo", &board, 7);
    assert_eq!(save.to_board(), board);
}

// =============================================================
// now_ms
// =============================================================

#[test]
fn now_ms_is_past_2020() {
    assert!(now_ms() > 1_577_836_800_000); // 2020-01-01
}
