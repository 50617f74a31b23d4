use super::*;
use futures::executor::block_on;
use pitch::board::{ItemKind, LineKind, PitchVariant, SeqIds};
use uuid::Uuid;

use crate::services::coach::{
    CoachClient, CoachError, CoachRequest, DrillAdvice, SheetItem, SheetLine, TacticSheet,
};
use crate::services::persistence::MemoryStore;

fn session() -> Session {
    Session::with_ids(Box::new(SeqIds::default()), Box::new(SeqIds::default()))
}

struct CannedCoach(DrillAdvice);

#[async_trait::async_trait(?Send)]
impl CoachClient for CannedCoach {
    async fn ask(&self, _request: &CoachRequest) -> Result<DrillAdvice, CoachError> {
        Ok(self.0.clone())
    }
}

fn rondo_advice() -> DrillAdvice {
    DrillAdvice {
        text: "A 4v2 rondo.".to_owned(),
        tactic: Some(TacticSheet {
            items: vec![
                SheetItem { kind: ItemKind::Home, x: 40.0, y: 40.0, label: Some("4".to_owned()) },
                SheetItem { kind: ItemKind::Away, x: 50.0, y: 50.0, label: None },
            ],
            lines: vec![SheetLine {
                kind: LineKind::Pass,
                start_x: 40.0,
                start_y: 40.0,
                end_x: 60.0,
                end_y: 40.0,
            }],
        }),
    }
}

// =============================================================
// Naming
// =============================================================

#[test]
fn new_session_has_default_name() {
    assert_eq!(session().name(), DEFAULT_SESSION_NAME);
}

#[test]
fn rename_updates_name_and_export_name() {
    let mut s = session();
    s.rename("High Press Drill");
    assert_eq!(s.name(), "High Press Drill");
    assert_eq!(s.export_name(), "High_Press_Drill.png");
}

#[test]
fn rename_does_not_touch_history() {
    let mut s = session();
    s.rename("Other");
    assert_eq!(s.engine().history().len(), 1);
}

// =============================================================
// Save / load
// =============================================================

#[test]
fn save_then_load_reproduces_the_board_exactly() {
    let mut store = MemoryStore::default();
    let mut s = session();
    s.engine_mut().add_item(ItemKind::Home);
    s.engine_mut().add_item(ItemKind::Ball);
    s.engine_mut().set_pitch(PitchVariant::Box);
    s.rename("Matchday");
    let saved_board = s.engine().board().clone();

    s.save(&mut store).unwrap();

    // Mutate away from the saved state, then load it back.
    s.engine_mut().reset_board();
    s.rename("Scratch");
    assert!(s.load_saved(0));

    assert_eq!(*s.engine().board(), saved_board);
    assert_eq!(s.name(), "Matchday");
    assert_eq!(s.engine().history().len(), 1);
    assert_eq!(*s.engine().history().current(), saved_board);
    assert_eq!(s.engine().selection(), None);
}

#[test]
fn save_same_name_overwrites_save() {
    let mut store = MemoryStore::default();
    let mut s = session();
    s.save(&mut store).unwrap();
    s.engine_mut().add_item(ItemKind::Cone);
    s.save(&mut store).unwrap();
    assert_eq!(s.saved().len(), 1);
    assert_eq!(s.saved()[0].items.len(), 1);
}

#[test]
fn save_new_name_appends() {
    let mut store = MemoryStore::default();
    let mut s = session();
    s.save(&mut store).unwrap();
    s.rename("Second");
    s.save(&mut store).unwrap();
    assert_eq!(s.saved().len(), 2);
}

#[test]
fn load_saved_bad_index_is_rejected() {
    let mut s = session();
    assert!(!s.load_saved(0));
    assert_eq!(s.name(), DEFAULT_SESSION_NAME);
}

#[test]
fn saved_sessions_survive_a_new_session() {
    let mut store = MemoryStore::default();
    let mut first = session();
    first.rename("Kept");
    first.engine_mut().add_item(ItemKind::Keeper);
    first.save(&mut store).unwrap();

    let mut second = session();
    second.load_saved_sessions(&store);
    assert_eq!(second.saved().len(), 1);
    assert!(second.load_saved(0));
    assert_eq!(second.name(), "Kept");
    assert_eq!(second.engine().board().items.len(), 1);
}

// =============================================================
// Coach
// =============================================================

#[test]
fn ask_coach_appends_prompt_and_reply() {
    let mut s = session().with_coach(CoachService::new(Box::new(CannedCoach(rondo_advice()))));
    let before = s.chat().messages().len();

    assert!(block_on(s.ask_coach("show me a 4v2 rondo")));

    assert_eq!(s.chat().messages().len(), before + 2);
    assert!(!s.chat().is_pending());
    let reply = s.chat().messages().last().unwrap();
    assert_eq!(reply.text, "A 4v2 rondo.");
    assert!(reply.tactic.is_some());
}

#[test]
fn ask_coach_rejects_blank_prompt() {
    let mut s = session().with_coach(CoachService::new(Box::new(CannedCoach(rondo_advice()))));
    let before = s.chat().messages().len();
    assert!(!block_on(s.ask_coach("  ")));
    assert_eq!(s.chat().messages().len(), before);
}

#[test]
fn apply_tactic_replaces_board_entities() {
    let mut s = session().with_coach(CoachService::new(Box::new(CannedCoach(rondo_advice()))));
    s.engine_mut().add_item(ItemKind::Cone);
    block_on(s.ask_coach("rondo please"));
    let history_before = s.engine().history().len();

    let reply_index = s.chat().messages().len() - 1;
    assert!(s.apply_tactic(reply_index));

    let board = s.engine().board();
    assert_eq!(board.items.len(), 2);
    assert_eq!(board.items[0].kind, ItemKind::Home);
    assert_eq!(board.items[0].id, Uuid::from_u128(1)); // sheet id source
    assert_eq!(board.lines.len(), 1);
    assert_eq!(s.engine().history().len(), history_before + 1);
}

#[test]
fn apply_tactic_keeps_pitch_variant() {
    let mut s = session().with_coach(CoachService::new(Box::new(CannedCoach(rondo_advice()))));
    s.engine_mut().set_pitch(PitchVariant::Half);
    block_on(s.ask_coach("rondo please"));
    s.apply_tactic(s.chat().messages().len() - 1);
    assert_eq!(s.engine().board().pitch, PitchVariant::Half);
}

#[test]
fn apply_tactic_without_sheet_is_rejected() {
    let mut s = session();
    let before = s.engine().history().len();
    assert!(!s.apply_tactic(0)); // the greeting has no sheet
    assert!(!s.apply_tactic(42));
    assert_eq!(s.engine().history().len(), before);
}

#[test]
fn applied_tactic_is_undoable() {
    let mut s = session().with_coach(CoachService::new(Box::new(CannedCoach(rondo_advice()))));
    let id = s.engine_mut().add_item(ItemKind::Cone);
    block_on(s.ask_coach("rondo please"));
    s.apply_tactic(s.chat().messages().len() - 1);

    s.engine_mut().undo();
    assert!(s.engine().board().item(id).is_some());
    assert!(s.engine().board().lines.is_empty());
}

// =============================================================
// Export
// =============================================================

#[test]
fn export_off_browser_reports_unavailable() {
    let s = session();
    assert!(s.export("board-canvas").is_err());
}
