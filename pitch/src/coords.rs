//! Board-space geometry: screen points, the canvas rectangle, and normalized
//! positions.
//!
//! The board lives in a fixed [0, 100] × [0, 100] coordinate space regardless
//! of how large the canvas element currently is. Every pointer event is
//! mapped through the element's bounding rectangle *at event time* — rects
//! are never cached, because the canvas can resize or scroll between events.

#[cfg(test)]
#[path = "coords_test.rs"]
mod coords_test;

use serde::{Deserialize, Serialize};

/// A raw pointer position in client-space CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The canvas element's bounding rectangle in client-space CSS pixels,
/// captured fresh by the host for each pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CanvasRect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    fn is_degenerate(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Map a client-space point to board coordinates, clamped to [0, 100].
    ///
    /// A degenerate rect (the canvas is not mounted yet, or has collapsed to
    /// zero size) maps everything to the board center.
    #[must_use]
    pub fn to_board(self, p: ScreenPoint) -> Position {
        if self.is_degenerate() {
            return Position::CENTER;
        }
        Position::new(
            (p.x - self.left) / self.width * 100.0,
            (p.y - self.top) / self.height * 100.0,
        )
    }

    /// Convert a raw pixel delta to a normalized board delta using this
    /// rect's dimensions. Degenerate rects yield no movement.
    #[must_use]
    pub fn to_board_delta(self, dx: f64, dy: f64) -> (f64, f64) {
        if self.is_degenerate() {
            return (0.0, 0.0);
        }
        (dx / self.width * 100.0, dy / self.height * 100.0)
    }
}

/// A position on the board, both axes normalized to [0, 100].
///
/// Clamped on every write: construction, translation, and deserialization
/// all go through [`Position::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "UncheckedPosition")]
pub struct Position {
    x: f64,
    y: f64,
}

/// Wire shape for [`Position`]; values are clamped on the way in.
#[derive(Deserialize)]
struct UncheckedPosition {
    x: f64,
    y: f64,
}

impl From<UncheckedPosition> for Position {
    fn from(raw: UncheckedPosition) -> Self {
        Self::new(raw.x, raw.y)
    }
}

impl Position {
    /// The board center, used as the spawn point for new items and the
    /// fallback when no canvas rect is available.
    pub const CENTER: Self = Self { x: 50.0, y: 50.0 };

    /// Build a position, clamping both axes into [0, 100].
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x: x.clamp(0.0, 100.0), y: y.clamp(0.0, 100.0) }
    }

    #[must_use]
    pub fn x(self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(self) -> f64 {
        self.y
    }

    /// Translate by a normalized delta, clamping each axis independently.
    #[must_use]
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Euclidean distance to another position, in normalized units.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}
