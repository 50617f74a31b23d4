//! Tools and the pointer gesture state machine.
//!
//! `Tool` captures the user's intent at pointer-down time. `Gesture` is the
//! active pointer interaction being tracked between pointer-down and
//! pointer-up; each dragging variant carries the context captured at
//! gesture start needed to compute deltas and decide whether pointer-up
//! commits to history.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::board::{EntityId, LineEnd, LineKind};
use crate::coords::{Position, ScreenPoint};

/// Which tool is currently active. Exclusive and global: one tool at a
/// time, persisted across actions until explicitly changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Select / move / edit (default).
    #[default]
    Cursor,
    /// Draw an off-ball run line.
    Movement,
    /// Draw a pass line.
    Pass,
    /// Draw a dribble line.
    Dribble,
}

impl Tool {
    /// The line kind this tool draws; `None` for the cursor.
    #[must_use]
    pub fn line_kind(self) -> Option<LineKind> {
        match self {
            Self::Cursor => None,
            Self::Movement => Some(LineKind::Movement),
            Self::Pass => Some(LineKind::Pass),
            Self::Dribble => Some(LineKind::Dribble),
        }
    }
}

/// State of the active pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// Moving an item.
    DragItem {
        id: EntityId,
        /// Item position at gesture start.
        origin: Position,
        /// Pointer position at gesture start, client pixels.
        anchor: ScreenPoint,
        /// Whether any pointer-move arrived; a motionless click must not
        /// commit to history.
        moved: bool,
    },
    /// Translating a whole line.
    DragLine {
        id: EntityId,
        /// Endpoints at gesture start.
        start: Position,
        end: Position,
        anchor: ScreenPoint,
        moved: bool,
    },
    /// Repositioning one endpoint of the selected line.
    DragEndpoint {
        id: EntityId,
        end: LineEnd,
        moved: bool,
    },
    /// Drawing a new line; the transient segment lives here, not on the
    /// board, until pointer-up decides whether to keep it.
    Draw {
        kind: LineKind,
        start: Position,
        end: Position,
    },
}
