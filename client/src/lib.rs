//! # client
//!
//! Session layer for the Touchline tactics board. Wraps the `pitch`
//! interaction core with everything that talks to the outside world: named
//! saved sessions in `localStorage`, PNG export of the rendered canvas, and
//! the AI drill coach with its chat transcript.
//!
//! Browser integration (storage, canvas capture, HTTP) is gated behind the
//! `hydrate` cargo feature; native builds run the same logic against
//! injected fakes, which is how the test suite exercises it.

pub mod services;
pub mod session;
pub mod state;

/// Initialize logging and panic reporting in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}
