//! Built-in themes, embedded from `themes/*.toml` at compile time.

mod loader;
mod registry;
mod types;

use std::sync::OnceLock;

use include_dir::{Dir, include_dir};

pub use registry::{by_name, names};
pub use types::{Theme, ThemeRegistration};

static THEME_FILES: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/style/theme/themes");

fn bundled() -> &'static loader::BuiltinThemes {
	static BUNDLED: OnceLock<loader::BuiltinThemes> = OnceLock::new();
	BUNDLED.get_or_init(|| {
		loader::load_builtin_themes(&THEME_FILES)
			.unwrap_or_else(|error| panic!("bundled themes are invalid: {error:#}"))
	})
}

/// Theme used when none is configured.
#[must_use]
pub fn default_theme() -> Theme {
	bundled().default_theme
}

pub(crate) fn registrations() -> &'static [ThemeRegistration] {
	&bundled().registrations
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
