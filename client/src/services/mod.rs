//! Service boundaries to external collaborators.
//!
//! DESIGN
//! ======
//! Every module here talks to something outside the process — storage, the
//! coach backend, the canvas element — and every one of them degrades
//! instead of failing: a broken save file is an empty list, a dead backend
//! is an apology message, a failed export is a logged error. Nothing in
//! this tree can take the interaction core down.

pub mod coach;
pub mod export;
pub mod persistence;
