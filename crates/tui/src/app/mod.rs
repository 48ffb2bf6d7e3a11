//! The inquiry browser application.
//!
//! [`App`] owns the prompt, the debounced search term, the fetch runtime and
//! the reducer-driven [`inqdesk_core::BrowserState`]. Supporting modules split
//! the behaviour into input handling, fetch coordination and rendering.

mod actions;
mod fetch;
mod render;
mod state;

pub use state::{App, BrowserOutcome};
