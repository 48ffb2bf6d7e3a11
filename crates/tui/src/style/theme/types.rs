use ratatui::style::{Color, Modifier, Style};

/// Styles for the individual parts of the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Table header and panel titles.
	pub header: Style,
	/// Selected table row.
	pub row_highlight: Style,
	/// Search prompt text.
	pub prompt: Style,
	/// Placeholders, hints, and other muted text.
	pub empty: Style,
	/// Characters matching the committed search term.
	pub highlight: Style,
	/// Error banner.
	pub error: Style,
	/// Panel borders.
	pub border: Style,
}

impl Theme {
	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn row_highlight_style(&self) -> Style {
		self.row_highlight
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn highlight_style(&self) -> Style {
		self.highlight
	}

	#[must_use]
	pub fn error_style(&self) -> Style {
		self.error
	}

	#[must_use]
	pub fn border_style(&self) -> Style {
		self.border
	}

	/// Label style inside the detail panel.
	#[must_use]
	pub fn label_style(&self) -> Style {
		Style::new()
			.fg(self.header.fg.unwrap_or(Color::Reset))
			.add_modifier(Modifier::BOLD)
	}
}

/// A named theme and the alternative names it answers to.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	pub name: String,
	pub theme: Theme,
	pub aliases: Vec<String>,
}

impl ThemeRegistration {
	pub fn new(name: impl Into<String>, theme: Theme) -> Self {
		Self {
			name: name.into(),
			theme,
			aliases: Vec::new(),
		}
	}

	pub fn alias(mut self, alias: impl Into<String>) -> Self {
		self.aliases.push(alias.into());
		self
	}

	/// Whether `name` refers to this theme, ignoring case and separators.
	#[must_use]
	pub fn answers_to(&self, name: &str) -> bool {
		let wanted = normalize_name(name);
		normalize_name(&self.name) == wanted
			|| self.aliases.iter().any(|alias| normalize_name(alias) == wanted)
	}
}

pub(crate) fn normalize_name(value: &str) -> String {
	value
		.trim()
		.to_ascii_lowercase()
		.chars()
		.map(|ch| match ch {
			'-' | ' ' => '_',
			other => other,
		})
		.collect()
}
