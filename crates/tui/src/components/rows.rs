use std::mem;

use frizbee::{Config, match_indices};
use inqdesk_core::Inquiry;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Row};

/// Character positions in `text` matched by `needle`.
#[must_use]
pub fn highlight_for(needle: &str, config: &Config, text: &str) -> Option<Vec<usize>> {
	if text.is_empty() || needle.is_empty() {
		return None;
	}
	match_indices(needle, text, config).map(|m| m.indices)
}

/// Cell with the characters at `indices` drawn in `highlight_style`.
#[must_use]
pub fn highlight_cell(
	text: &str,
	indices: Option<Vec<usize>>,
	highlight_style: Style,
) -> Cell<'static> {
	let Some(mut sorted_indices) = indices.filter(|indices| !indices.is_empty()) else {
		return Cell::from(text.to_string());
	};
	sorted_indices.sort_unstable();
	let mut next = sorted_indices.into_iter().peekable();
	let mut buffer = String::new();
	let mut highlighted = false;
	let mut spans = Vec::new();

	for (idx, ch) in text.chars().enumerate() {
		let should_highlight = next.peek().copied() == Some(idx);
		if should_highlight {
			next.next();
		}
		if should_highlight != highlighted {
			if !buffer.is_empty() {
				let style = if highlighted {
					highlight_style
				} else {
					Style::default()
				};
				spans.push(Span::styled(mem::take(&mut buffer), style));
			}
			highlighted = should_highlight;
		}
		buffer.push(ch);
	}

	if !buffer.is_empty() {
		let style = if highlighted {
			highlight_style
		} else {
			Style::default()
		};
		spans.push(Span::styled(buffer, style));
	}

	Cell::from(Line::from(spans))
}

/// Short creation timestamp used in the table.
#[must_use]
pub fn received_label(inquiry: &Inquiry) -> String {
	inquiry.created_at.format("%Y-%m-%d %H:%M").to_string()
}

/// Table rows for the loaded page, highlighting the committed search term.
#[must_use]
pub fn build_inquiry_rows(
	inquiries: &[Inquiry],
	needle: Option<&str>,
	highlight_style: Style,
) -> Vec<Row<'static>> {
	let config = Config::default();
	let cell = |text: &str| {
		let indices = needle.and_then(|needle| highlight_for(needle, &config, text));
		highlight_cell(text, indices, highlight_style)
	};

	inquiries
		.iter()
		.map(|inquiry| {
			Row::new([
				Cell::from(received_label(inquiry)),
				cell(&inquiry.name),
				cell(&inquiry.email),
				cell(inquiry.company_or_empty()),
				cell(&inquiry.subject),
				Cell::from(inquiry.effective_status().as_str()),
			])
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use ratatui::style::{Color, Style};
	use ratatui::text::Text;

	use super::*;

	#[test]
	fn highlighted_spans_split_on_matches() {
		let style = Style::new().fg(Color::Yellow);
		let cell = highlight_cell("acme", Some(vec![0, 1]), style);
		let expected = Cell::from(Text::from(Line::from(vec![
			Span::styled("ac", style),
			Span::styled("me", Style::default()),
		])));
		assert_eq!(cell, expected);
	}

	#[test]
	fn missing_indices_leave_text_plain() {
		let cell = highlight_cell("acme", None, Style::default());
		assert_eq!(cell, Cell::from("acme"));
	}

	#[test]
	fn empty_needle_never_highlights() {
		assert_eq!(highlight_for("", &Config::default(), "acme"), None);
	}
}
