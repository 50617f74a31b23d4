//! Static render configuration for markers, lines, and pitch variants.
//!
//! Rendering itself lives entirely in the embedding layer; these tables are
//! the single source of truth it dispatches on. Marker sizes are CSS pixels
//! at the reference canvas width; positions stay normalized.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use crate::board::{ItemKind, LineKind, PitchVariant};

/// Visual descriptor for a marker kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemStyle {
    /// Human-readable name shown in the item palette.
    pub name: &'static str,
    /// Fill color (CSS).
    pub color: &'static str,
    /// Icon / label color (CSS).
    pub text_color: &'static str,
    /// Icon size in CSS pixels.
    pub size: f64,
    /// Rendered (and hit-tested) box in CSS pixels; round markers are square.
    pub width: f64,
    pub height: f64,
}

const fn square(name: &'static str, color: &'static str, text_color: &'static str, size: f64) -> ItemStyle {
    ItemStyle { name, color, text_color, size, width: size, height: size }
}

const HOME: ItemStyle = square("Home Player", "#2563eb", "#ffffff", 32.0);
const AWAY: ItemStyle = square("Away Player", "#dc2626", "#ffffff", 32.0);
const KEEPER: ItemStyle = square("Goalkeeper", "#facc15", "#000000", 32.0);
const BALL: ItemStyle = square("Ball", "#ffffff", "#000000", 20.0);
const CONE: ItemStyle = square("Cone", "#f97316", "#ffffff", 24.0);
const GOAL: ItemStyle = square("Goal", "rgba(255, 255, 255, 0.8)", "#000000", 60.0);
const LADDER: ItemStyle = ItemStyle {
    name: "Agility Ladder",
    color: "#fde047",
    text_color: "#000000",
    size: 40.0,
    width: 30.0,
    height: 120.0,
};
const NOTE: ItemStyle = square("Note", "#fde68a", "#78350f", 28.0);

impl ItemKind {
    #[must_use]
    pub fn style(self) -> &'static ItemStyle {
        match self {
            Self::Home => &HOME,
            Self::Away => &AWAY,
            Self::Keeper => &KEEPER,
            Self::Ball => &BALL,
            Self::Cone => &CONE,
            Self::Goal => &GOAL,
            Self::Ladder => &LADDER,
            Self::Note => &NOTE,
        }
    }
}

/// Visual descriptor for a line kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub name: &'static str,
    /// Stroke color (CSS).
    pub color: &'static str,
    /// SVG dash pattern; `"0"` is solid.
    pub dash: &'static str,
    pub stroke_width: f64,
}

const MOVEMENT: LineStyle = LineStyle { name: "Movement", color: "#fbbf24", dash: "0", stroke_width: 1.5 };
const PASS: LineStyle = LineStyle { name: "Pass", color: "#38bdf8", dash: "4, 4", stroke_width: 1.5 };
const DRIBBLE: LineStyle = LineStyle { name: "Dribble", color: "#ffffff", dash: "1, 3", stroke_width: 1.5 };

impl LineKind {
    #[must_use]
    pub fn style(self) -> &'static LineStyle {
        match self {
            Self::Movement => &MOVEMENT,
            Self::Pass => &PASS,
            Self::Dribble => &DRIBBLE,
        }
    }
}

impl PitchVariant {
    /// Width-over-height ratio of the rendered canvas for this variant.
    /// Coordinates are unaffected; only the element's shape changes.
    #[must_use]
    pub fn aspect_ratio(self) -> f64 {
        match self {
            Self::Full | Self::Empty => 1.5,
            Self::Half => 1.29,
            Self::Box => 1.51,
        }
    }
}
