//! The interaction engine: board, history, selection, and gesture handling.
//!
//! All mutation is synchronous. A durable action mutates the board and
//! commits its history snapshot inside the same call — commits are never
//! deferred to a render tick. Mid-gesture mutations are applied live to the
//! board so the host can render them, but only the terminal pointer-up
//! commit is durable; undoing a drag restores the pre-drag board in one
//! step.
//!
//! The host owns pointer capture: once a gesture starts, every move/up
//! event reaches the engine even when the pointer leaves the canvas, which
//! is why out-of-bounds coordinates are clamped rather than rejected.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::board::{Board, EntityId, IdGen, Item, ItemKind, Line, LineKind, PitchVariant, Selection, UuidIds};
use crate::consts::MIN_LINE_LENGTH;
use crate::coords::{CanvasRect, Position, ScreenPoint};
use crate::history::History;
use crate::hit::{Hit, HitPart, hit_test};
use crate::input::{Gesture, Tool};

/// The interaction core. Owns the live board, the undo/redo log, the
/// selection, the active tool, and the in-flight pointer gesture.
pub struct Engine {
    board: Board,
    history: History,
    selection: Option<Selection>,
    tool: Tool,
    gesture: Gesture,
    ids: Box<dyn IdGen>,
    /// Set by label keystrokes; decides whether blur commits.
    label_dirty: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Engine over an empty board with random ids.
    #[must_use]
    pub fn new() -> Self {
        Self::with_ids(Box::new(UuidIds))
    }

    /// Engine over an empty board with an injected id source.
    #[must_use]
    pub fn with_ids(ids: Box<dyn IdGen>) -> Self {
        let board = Board::default();
        Self {
            history: History::new(board.clone()),
            board,
            selection: None,
            tool: Tool::Cursor,
            gesture: Gesture::Idle,
            ids,
            label_dirty: false,
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    #[must_use]
    pub fn selected_item(&self) -> Option<&Item> {
        match self.selection? {
            Selection::Item(id) => self.board.item(id),
            Selection::Line(_) => None,
        }
    }

    #[must_use]
    pub fn selected_line(&self) -> Option<&Line> {
        match self.selection? {
            Selection::Line(id) => self.board.line(id),
            Selection::Item(_) => None,
        }
    }

    #[must_use]
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// The in-progress draw segment for the renderer, if one exists.
    #[must_use]
    pub fn drawing(&self) -> Option<(LineKind, Position, Position)> {
        match self.gesture {
            Gesture::Draw { kind, start, end } => Some((kind, start, end)),
            _ => None,
        }
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // --- Tool ---

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    // --- Pointer protocol ---

    /// Start a gesture. With the cursor tool this hit-tests and begins the
    /// matching drag (selecting what was hit) or clears the selection on
    /// empty canvas; with a drawing tool it begins a transient line draw.
    pub fn pointer_down(&mut self, screen: ScreenPoint, rect: CanvasRect) {
        let pos = rect.to_board(screen);

        if let Some(kind) = self.tool.line_kind() {
            self.selection = None;
            self.gesture = Gesture::Draw { kind, start: pos, end: pos };
            return;
        }

        match hit_test(pos, &self.board, self.selection, rect) {
            Some(Hit { id, part: HitPart::ItemBody }) => {
                let Some(item) = self.board.item(id) else { return };
                self.gesture = Gesture::DragItem { id, origin: item.pos, anchor: screen, moved: false };
                self.selection = Some(Selection::Item(id));
            }
            Some(Hit { id, part: HitPart::LineEndpoint(end) }) => {
                self.gesture = Gesture::DragEndpoint { id, end, moved: false };
                self.selection = Some(Selection::Line(id));
            }
            Some(Hit { id, part: HitPart::LineBody }) => {
                let Some(line) = self.board.line(id) else { return };
                self.gesture = Gesture::DragLine {
                    id,
                    start: line.start,
                    end: line.end,
                    anchor: screen,
                    moved: false,
                };
                self.selection = Some(Selection::Line(id));
            }
            None => {
                self.selection = None;
            }
        }
    }

    /// Advance the active gesture. Deltas are computed against the rect at
    /// move time, so a canvas resize mid-drag is tolerated.
    pub fn pointer_move(&mut self, screen: ScreenPoint, rect: CanvasRect) {
        match self.gesture {
            Gesture::Idle => {}
            Gesture::DragItem { id, origin, anchor, .. } => {
                let (dx, dy) = rect.to_board_delta(screen.x - anchor.x, screen.y - anchor.y);
                if let Some(item) = self.board.item_mut(id) {
                    item.pos = origin.translated(dx, dy);
                }
                self.gesture = Gesture::DragItem { id, origin, anchor, moved: true };
            }
            Gesture::DragLine { id, start, end, anchor, .. } => {
                let (dx, dy) = rect.to_board_delta(screen.x - anchor.x, screen.y - anchor.y);
                if let Some(line) = self.board.line_mut(id) {
                    // Each endpoint clamps independently: a line shortens
                    // against a canvas edge instead of stopping.
                    line.start = start.translated(dx, dy);
                    line.end = end.translated(dx, dy);
                }
                self.gesture = Gesture::DragLine { id, start, end, anchor, moved: true };
            }
            Gesture::DragEndpoint { id, end, .. } => {
                let pos = rect.to_board(screen);
                if let Some(line) = self.board.line_mut(id) {
                    line.set_point(end, pos);
                }
                self.gesture = Gesture::DragEndpoint { id, end, moved: true };
            }
            Gesture::Draw { kind, start, .. } => {
                self.gesture = Gesture::Draw { kind, start, end: rect.to_board(screen) };
            }
        }
    }

    /// End the active gesture. Drags commit one snapshot only if a move
    /// happened (a motionless click changes selection alone). A draw keeps
    /// its line only if the endpoints are far enough apart; sub-threshold
    /// segments vanish without touching the board or the history.
    pub fn pointer_up(&mut self) {
        match self.gesture {
            Gesture::Idle => {}
            Gesture::DragItem { moved, .. } | Gesture::DragLine { moved, .. } | Gesture::DragEndpoint { moved, .. } => {
                if moved {
                    self.commit();
                }
            }
            Gesture::Draw { kind, start, end } => {
                if start.distance_to(end) >= MIN_LINE_LENGTH {
                    let line = Line::new(self.ids.next(), kind, start, end);
                    self.selection = Some(Selection::Line(line.id));
                    self.board.lines.push(line);
                    self.commit();
                }
            }
        }
        self.gesture = Gesture::Idle;
    }

    // --- Discrete actions ---

    /// Place a new item of `kind` at the board center, select it, and switch
    /// back to the cursor tool so it can be dragged immediately.
    pub fn add_item(&mut self, kind: ItemKind) -> EntityId {
        let item = Item::new(self.ids.next(), kind);
        let id = item.id;
        self.board.items.push(item);
        self.selection = Some(Selection::Item(id));
        self.tool = Tool::Cursor;
        self.commit();
        id
    }

    /// Rotate the selected item one step clockwise.
    pub fn rotate_selected(&mut self) {
        let Some(Selection::Item(id)) = self.selection else { return };
        let Some(item) = self.board.item_mut(id) else { return };
        item.rotate();
        self.commit();
    }

    /// Delete whichever entity is selected and clear the selection.
    pub fn delete_selection(&mut self) {
        let removed = match self.selection {
            Some(Selection::Item(id)) => self.board.remove_item(id).is_some(),
            Some(Selection::Line(id)) => self.board.remove_line(id).is_some(),
            None => false,
        };
        self.selection = None;
        if removed {
            self.commit();
        }
    }

    /// Replace the selected item's label. Applied live on every keystroke;
    /// history is untouched until [`Self::finish_label_edit`].
    pub fn set_selected_label(&mut self, label: &str) {
        let Some(Selection::Item(id)) = self.selection else { return };
        let Some(item) = self.board.item_mut(id) else { return };
        item.label = Some(label.to_owned());
        self.label_dirty = true;
    }

    /// Commit a label editing burst. Called on focus loss; typing then
    /// blurring yields exactly one history entry with the final text, and a
    /// blur without any keystroke commits nothing.
    pub fn finish_label_edit(&mut self) {
        if self.label_dirty {
            self.commit();
        }
    }

    /// Change the pitch background. Items and lines are untouched.
    pub fn set_pitch(&mut self, pitch: PitchVariant) {
        self.board.pitch = pitch;
        self.commit();
    }

    /// Step back one snapshot; no-op at the start of history.
    pub fn undo(&mut self) {
        if let Some(snapshot) = self.history.undo() {
            self.board = snapshot.clone();
            self.selection = None;
        }
    }

    /// Step forward one snapshot; no-op at the end of history.
    pub fn redo(&mut self) {
        if let Some(snapshot) = self.history.redo() {
            self.board = snapshot.clone();
            self.selection = None;
        }
    }

    /// Clear items and lines, keeping the pitch variant. Destructive —
    /// callers confirm intent with the user before calling; declining means
    /// simply not calling.
    pub fn reset_board(&mut self) {
        self.board.items.clear();
        self.board.lines.clear();
        self.selection = None;
        self.commit();
    }

    /// Replace the live board wholesale and restart history from it.
    pub fn load_board(&mut self, board: Board) {
        self.board = board.clone();
        self.history.reset_to(board);
        self.selection = None;
        self.gesture = Gesture::Idle;
        self.label_dirty = false;
    }

    /// Replace items and lines with an externally proposed set (an applied
    /// drill), keeping the pitch variant. A selection whose entity vanished
    /// with the replacement is dropped.
    pub fn apply_generated(&mut self, items: Vec<Item>, lines: Vec<Line>) {
        self.board.items = items;
        self.board.lines = lines;
        self.prune_selection();
        self.commit();
    }

    fn prune_selection(&mut self) {
        let alive = match self.selection {
            Some(Selection::Item(id)) => self.board.item(id).is_some(),
            Some(Selection::Line(id)) => self.board.line(id).is_some(),
            None => false,
        };
        if !alive {
            self.selection = None;
        }
    }

    fn commit(&mut self) {
        self.history.commit(&self.board);
        self.label_dirty = false;
    }
}
