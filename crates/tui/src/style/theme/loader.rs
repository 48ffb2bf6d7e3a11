//! Parse the bundled TOML theme documents.

use anyhow::{Context, Result, anyhow, bail};
use include_dir::{Dir, File};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::style::theme::types::{Theme, ThemeRegistration, normalize_name};

pub(super) struct BuiltinThemes {
	pub(super) registrations: Vec<ThemeRegistration>,
	pub(super) default_theme: Theme,
}

/// One `themes/*.toml` document.
#[derive(Debug, Deserialize)]
struct ThemeFile {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	styles: Styles,
}

#[derive(Debug, Deserialize)]
struct Styles {
	header: StyleSpec,
	row_highlight: StyleSpec,
	prompt: StyleSpec,
	empty: StyleSpec,
	highlight: StyleSpec,
	error: StyleSpec,
	border: StyleSpec,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StyleSpec {
	fg: Option<String>,
	bg: Option<String>,
	modifiers: Vec<String>,
}

const NAMED_COLORS: &[(&str, Color)] = &[
	("reset", Color::Reset),
	("default", Color::Reset),
	("black", Color::Black),
	("red", Color::Red),
	("green", Color::Green),
	("yellow", Color::Yellow),
	("blue", Color::Blue),
	("magenta", Color::Magenta),
	("cyan", Color::Cyan),
	("gray", Color::Gray),
	("grey", Color::Gray),
	("dark_gray", Color::DarkGray),
	("dark_grey", Color::DarkGray),
	("light_red", Color::LightRed),
	("light_green", Color::LightGreen),
	("light_yellow", Color::LightYellow),
	("light_blue", Color::LightBlue),
	("light_magenta", Color::LightMagenta),
	("light_cyan", Color::LightCyan),
	("white", Color::White),
];

const NAMED_MODIFIERS: &[(&str, Modifier)] = &[
	("bold", Modifier::BOLD),
	("dim", Modifier::DIM),
	("italic", Modifier::ITALIC),
	("underline", Modifier::UNDERLINED),
	("underlined", Modifier::UNDERLINED),
	("reversed", Modifier::REVERSED),
	("reverse", Modifier::REVERSED),
	("crossed_out", Modifier::CROSSED_OUT),
	("strikethrough", Modifier::CROSSED_OUT),
];

impl StyleSpec {
	fn to_style(&self, slot: &str) -> Result<Style> {
		let mut style = Style::new();
		if let Some(fg) = &self.fg {
			style = style.fg(parse_color(fg).with_context(|| format!("{slot}.fg"))?);
		}
		if let Some(bg) = &self.bg {
			style = style.bg(parse_color(bg).with_context(|| format!("{slot}.bg"))?);
		}
		for name in &self.modifiers {
			let modifier = lookup(NAMED_MODIFIERS, name)
				.ok_or_else(|| anyhow!("{slot}: unknown modifier `{name}`"))?;
			style = style.add_modifier(modifier);
		}
		Ok(style)
	}
}

impl Styles {
	fn to_theme(&self) -> Result<Theme> {
		Ok(Theme {
			header: self.header.to_style("header")?,
			row_highlight: self.row_highlight.to_style("row_highlight")?,
			prompt: self.prompt.to_style("prompt")?,
			empty: self.empty.to_style("empty")?,
			highlight: self.highlight.to_style("highlight")?,
			error: self.error.to_style("error")?,
			border: self.border.to_style("border")?,
		})
	}
}

fn lookup<T: Copy>(table: &[(&str, T)], name: &str) -> Option<T> {
	let key = normalize_name(name);
	table
		.iter()
		.find(|(candidate, _)| *candidate == key)
		.map(|(_, value)| *value)
}

/// Accepts `#rrggbb`, an ANSI index (`42` or `ansi(42)`), or a colour name.
fn parse_color(input: &str) -> Result<Color> {
	let value = input.trim();

	if let Some(hex) = value.strip_prefix('#') {
		if hex.len() != 6 || !hex.is_ascii() {
			bail!("hex colour `{value}` must have six digits");
		}
		let channel = |range: std::ops::Range<usize>| {
			u8::from_str_radix(&hex[range], 16)
				.with_context(|| format!("invalid hex colour `{value}`"))
		};
		return Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?));
	}

	let index = value
		.strip_prefix("ansi(")
		.and_then(|rest| rest.strip_suffix(')'))
		.unwrap_or(value);
	if let Ok(index) = index.trim().parse::<u8>() {
		return Ok(Color::Indexed(index));
	}

	lookup(NAMED_COLORS, value).ok_or_else(|| anyhow!("unknown colour `{value}`"))
}

fn parse_file(file: &File) -> Result<(ThemeRegistration, bool)> {
	let path = file.path().display().to_string();
	let contents = file
		.contents_utf8()
		.with_context(|| format!("theme {path} is not valid UTF-8"))?;
	let document: ThemeFile =
		toml::from_str(contents).with_context(|| format!("failed to parse theme {path}"))?;
	let theme = document
		.styles
		.to_theme()
		.with_context(|| format!("invalid style in theme {path}"))?;

	let registration = document
		.aliases
		.iter()
		.map(|alias| alias.trim())
		.filter(|alias| !alias.is_empty())
		.fold(ThemeRegistration::new(document.name, theme), ThemeRegistration::alias);
	Ok((registration, document.default))
}

/// Load every theme in `dir`. Exactly one of them must be marked default.
pub(super) fn load_builtin_themes(dir: &Dir) -> Result<BuiltinThemes> {
	let mut files: Vec<_> = dir.files().collect();
	files.sort_by(|a, b| a.path().cmp(b.path()));

	let parsed = files
		.into_iter()
		.map(parse_file)
		.collect::<Result<Vec<_>>>()?;

	let defaults: Vec<&ThemeRegistration> = parsed
		.iter()
		.filter(|(_, is_default)| *is_default)
		.map(|(registration, _)| registration)
		.collect();
	let default_theme = match defaults.as_slice() {
		[single] => single.theme,
		[] => bail!("no built-in theme is marked as default"),
		[first, second, ..] => bail!(
			"built-in themes `{}` and `{}` are both marked as default",
			first.name,
			second.name
		),
	};

	Ok(BuiltinThemes {
		registrations: parsed.into_iter().map(|(registration, _)| registration).collect(),
		default_theme,
	})
}
