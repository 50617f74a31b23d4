//! Shared numeric constants for the pitch crate.

// ── Gestures ────────────────────────────────────────────────────

/// Minimum length, in normalized units, for a drawn line to be kept.
/// Shorter draw gestures are discarded without a history commit.
pub const MIN_LINE_LENGTH: f64 = 2.0;

/// Rotation applied by one rotate action, in degrees.
pub const ROTATION_STEP_DEGREES: f64 = 45.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Hit radius around a selected line's endpoint handles, normalized units.
pub const HANDLE_HIT_RADIUS: f64 = 3.0;

/// Maximum distance from a line body that still grabs it, normalized units.
/// Matches an 8-unit-wide invisible grab stroke centered on the segment.
pub const LINE_HIT_RADIUS: f64 = 4.0;
