//! Terminal front-end for the `inqdesk` inquiry browser.
//!
//! Contains the [`App`] with its event loop and render pass, plus the widgets
//! and themes it draws with.

mod app;
pub mod components;
mod config;
pub mod input;
mod runtime;
pub mod style;

pub use app::{App, BrowserOutcome};
pub use config::UiLabels;

pub use crate::input::QueryInput;
pub use crate::style::{Theme, default_theme};
