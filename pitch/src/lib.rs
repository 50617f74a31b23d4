//! Interaction core for the Touchline tactics board.
//!
//! This crate owns everything with state-machine structure in the app:
//! translating raw pointer events into board mutations, hit-testing markers
//! and annotation lines, and the linear undo/redo history that wraps every
//! durable action. It is a pure library — no DOM types anywhere. The
//! embedding layer feeds each pointer event in as client pixels plus the
//! canvas element's current bounding rectangle, and reads back the board,
//! selection, and transient draw state to render.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | The interaction engine: pointer protocol + discrete actions |
//! | [`board`] | Entity model: items, lines, the board aggregate, id generation |
//! | [`coords`] | Screen-pixel to normalized board-space mapping |
//! | [`history`] | Linear undo/redo log of full board snapshots |
//! | [`hit`] | Hit-testing pointer positions against board entities |
//! | [`input`] | Tools and the pointer gesture state machine |
//! | [`style`] | Static render configuration for markers, lines, and pitches |
//! | [`consts`] | Shared numeric constants (hit radii, thresholds) |

pub mod board;
pub mod consts;
pub mod coords;
pub mod engine;
pub mod history;
pub mod hit;
pub mod input;
pub mod style;
