//! Visual styling for the terminal UI.

pub mod theme;

pub use theme::{Theme, ThemeRegistration, by_name, default_theme, names};
