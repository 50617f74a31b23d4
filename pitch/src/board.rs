//! Entity model: items, lines, the board aggregate, and id generation.
//!
//! Items and lines live in ordered sequences — there is no z-index model;
//! the only stacking rule is that the selected entity renders (and
//! hit-tests) on top. All types here are the persistence and wire shape:
//! they serialize with serde and round-trip exactly.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::ROTATION_STEP_DEGREES;
use crate::coords::Position;

/// Unique identifier for an item or line.
pub type EntityId = Uuid;

/// Source of identifiers for new entities.
///
/// Injected into the engine so embedders and tests can substitute a
/// deterministic sequence for the default random generator.
pub trait IdGen {
    fn next(&mut self) -> EntityId;
}

/// Random v4 ids. Uniqueness rests on generation entropy; a collision is a
/// possible-but-ignored edge case.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGen for UuidIds {
    fn next(&mut self) -> EntityId {
        Uuid::new_v4()
    }
}

/// Monotonic counter ids, for deterministic tests and replays.
#[derive(Debug, Clone, Default)]
pub struct SeqIds {
    last: u64,
}

impl IdGen for SeqIds {
    fn next(&mut self) -> EntityId {
        self.last += 1;
        Uuid::from_u128(u128::from(self.last))
    }
}

/// The kind of a placeable marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Home-team outfield player.
    Home,
    /// Away-team outfield player.
    Away,
    /// Goalkeeper.
    Keeper,
    Ball,
    Cone,
    Goal,
    /// Agility ladder; the only non-square marker.
    Ladder,
    /// Sticky note.
    Note,
}

impl ItemKind {
    /// Label given to a freshly placed item of this kind (jersey number for
    /// players, nothing otherwise).
    #[must_use]
    pub fn default_label(self) -> Option<String> {
        match self {
            Self::Home | Self::Away => Some("1".to_owned()),
            _ => None,
        }
    }

    /// Note body given to a freshly placed item of this kind.
    #[must_use]
    pub fn default_text(self) -> Option<String> {
        matches!(self, Self::Note).then(String::new)
    }
}

/// A placeable marker on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: EntityId,
    pub kind: ItemKind,
    pub pos: Position,
    /// Clockwise rotation in degrees, always in [0, 360).
    pub rotation: f64,
    /// Short user-editable label (jersey number or name).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub label: Option<String>,
    /// Note body text; unused by other kinds.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub text: Option<String>,
}

impl Item {
    /// Create an item of `kind` at the board center with the kind's defaults.
    #[must_use]
    pub fn new(id: EntityId, kind: ItemKind) -> Self {
        Self {
            id,
            kind,
            pos: Position::CENTER,
            rotation: 0.0,
            label: kind.default_label(),
            text: kind.default_text(),
        }
    }

    /// Advance rotation by one step, wrapping modulo 360.
    pub fn rotate(&mut self) {
        self.rotation = (self.rotation + ROTATION_STEP_DEGREES).rem_euclid(360.0);
    }
}

/// The kind of a directional annotation line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Off-ball run.
    Movement,
    Pass,
    Dribble,
}

/// Which endpoint of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnd {
    Start,
    End,
}

/// A directional annotation from `start` to `end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub id: EntityId,
    pub kind: LineKind,
    pub start: Position,
    pub end: Position,
}

impl Line {
    #[must_use]
    pub fn new(id: EntityId, kind: LineKind, start: Position, end: Position) -> Self {
        Self { id, kind, start, end }
    }

    /// Length in normalized units.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance_to(self.end)
    }

    #[must_use]
    pub fn point(&self, end: LineEnd) -> Position {
        match end {
            LineEnd::Start => self.start,
            LineEnd::End => self.end,
        }
    }

    pub fn set_point(&mut self, end: LineEnd, pos: Position) {
        match end {
            LineEnd::Start => self.start = pos,
            LineEnd::End => self.end = pos,
        }
    }
}

/// The pitch background / markings variant. Purely a rendering choice: the
/// coordinate space is identical across variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PitchVariant {
    #[default]
    Full,
    Half,
    /// Penalty-box detail view.
    Box,
    Empty,
}

/// The complete diagram state at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub items: Vec<Item>,
    pub lines: Vec<Line>,
    #[serde(default)]
    pub pitch: PitchVariant,
}

impl Board {
    #[must_use]
    pub fn item(&self, id: EntityId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn item_mut(&mut self, id: EntityId) -> Option<&mut Item> {
        self.items.iter_mut().find(|i| i.id == id)
    }

    #[must_use]
    pub fn line(&self, id: EntityId) -> Option<&Line> {
        self.lines.iter().find(|l| l.id == id)
    }

    pub fn line_mut(&mut self, id: EntityId) -> Option<&mut Line> {
        self.lines.iter_mut().find(|l| l.id == id)
    }

    /// Remove an item by id; unknown ids are a no-op.
    pub fn remove_item(&mut self, id: EntityId) -> Option<Item> {
        let idx = self.items.iter().position(|i| i.id == id)?;
        Some(self.items.remove(idx))
    }

    /// Remove a line by id; unknown ids are a no-op.
    pub fn remove_line(&mut self, id: EntityId) -> Option<Line> {
        let idx = self.lines.iter().position(|l| l.id == id)?;
        Some(self.lines.remove(idx))
    }
}

/// The single selected entity. Held as `Option<Selection>`; not persisted,
/// and never part of the undo history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Item(EntityId),
    Line(EntityId),
}

impl Selection {
    #[must_use]
    pub fn id(self) -> EntityId {
        match self {
            Self::Item(id) | Self::Line(id) => id,
        }
    }
}
