use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::input::QueryInput;
use crate::style::Theme;

/// Argument bundle for rendering the prompt row.
pub struct InputContext<'a> {
	pub search_input: &'a QueryInput<'a>,
	/// Title drawn before the editable text.
	pub title: &'a str,
	/// Placeholder text shown when input is empty.
	pub placeholder: Option<&'a str>,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Activity indicator drawn at the right edge of the prompt.
pub struct ProgressState<'a> {
	pub progress_text: &'a str,
	/// When `false` a spinner precedes the text.
	pub progress_complete: bool,
	pub throbber_state: &'a ThrobberState,
}

/// Render the prompt row with its placeholder and activity indicator.
pub fn render_input(frame: &mut Frame, input: InputContext<'_>, progress: ProgressState<'_>) {
	let InputContext {
		search_input,
		title,
		placeholder,
		area,
		theme,
	} = input;
	let ProgressState {
		progress_text,
		progress_complete,
		throbber_state,
	} = progress;

	let prefix = format!("{title} › ");
	let prefix_width = Line::from(prefix.as_str()).width() as u16;
	let [title_area, text_area] =
		Layout::horizontal([Constraint::Length(prefix_width), Constraint::Fill(1)]).areas(area);

	frame.buffer_mut().set_line(
		title_area.x,
		title_area.y,
		&Line::styled(prefix, theme.header_style()),
		title_area.width,
	);
	search_input.render(frame, text_area);

	let progress_x = render_progress(
		frame,
		text_area,
		progress_text,
		progress_complete,
		throbber_state,
		theme,
	);

	if search_input.text().is_empty()
		&& let Some(placeholder_text) = placeholder
	{
		let right = progress_x.map_or(text_area.right(), |x| x.saturating_sub(1));
		let placeholder_area = Rect {
			width: right.saturating_sub(text_area.x).min(text_area.width),
			..text_area
		};
		render_placeholder(frame, placeholder_area, placeholder_text, theme);
	}
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	if area.width == 0 || area.height == 0 || text.is_empty() {
		return;
	}
	// Leave the first column to the cursor.
	let available_width = area.width.saturating_sub(1) as usize;
	let display_text: String = text.chars().take(available_width).collect();
	frame.buffer_mut().set_line(
		area.left().saturating_add(1),
		area.top(),
		&Line::from(Span::styled(display_text, theme.empty_style())),
		area.width.saturating_sub(1),
	);
}

fn render_progress(
	frame: &mut Frame,
	area: Rect,
	progress_text: &str,
	progress_complete: bool,
	throbber_state: &ThrobberState,
	theme: &Theme,
) -> Option<u16> {
	if area.width == 0 || area.height == 0 || progress_text.is_empty() {
		return None;
	}

	let muted_style = theme.empty_style();
	let mut line = Line::default();
	if !progress_complete {
		let spinner = Throbber::default()
			.style(muted_style)
			.throbber_style(muted_style);
		line.spans.push(spinner.to_symbol_span(throbber_state));
	}
	line.spans
		.push(Span::styled(progress_text.to_string(), muted_style));

	let line_width = line.width() as u16;
	if line_width == 0 {
		return None;
	}

	let buffer = frame.buffer_mut();
	let mut start_x = if line_width >= area.width {
		area.left()
	} else {
		area.right().saturating_sub(line_width)
	};

	// Never draw over typed text.
	let input_row = area.top();
	let mut last_char_x: Option<u16> = None;
	for x in area.left()..area.right() {
		if let Some(cell) = buffer.cell((x, input_row))
			&& !cell.symbol().trim().is_empty()
		{
			last_char_x = Some(x);
		}
	}

	if let Some(last_x) = last_char_x {
		start_x = start_x.max(last_x.saturating_add(3));
	}

	if start_x >= area.right() {
		return None;
	}

	let max_width = area
		.right()
		.saturating_sub(start_x)
		.min(line_width)
		.min(area.width);

	if max_width == 0 {
		return None;
	}

	buffer.set_line(start_x, input_row, &line, max_width);
	Some(start_x)
}
