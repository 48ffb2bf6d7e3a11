use inqdesk_core::Inquiry;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::style::Theme;

const DETAIL_HINTS: &str = " r reply · ↑/↓ previous/next · Esc close ";

/// Centre a `percent_x` × `percent_y` rectangle inside `area`.
fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
	let [_, middle, _] = Layout::vertical([
		Constraint::Percentage((100 - percent_y) / 2),
		Constraint::Percentage(percent_y),
		Constraint::Percentage((100 - percent_y) / 2),
	])
	.areas(area);
	let [_, center, _] = Layout::horizontal([
		Constraint::Percentage((100 - percent_x) / 2),
		Constraint::Percentage(percent_x),
		Constraint::Percentage((100 - percent_x) / 2),
	])
	.areas(middle);
	center
}

fn field<'a>(label: &'a str, value: String, theme: &Theme) -> Line<'a> {
	Line::from(vec![
		Span::styled(format!("{label:<10}"), theme.label_style()),
		Span::raw(value),
	])
}

/// Read-only overlay showing every field of `inquiry`.
pub fn render_detail(frame: &mut Frame, inquiry: &Inquiry, title: &str, area: Rect, theme: &Theme) {
	let popup = centered(area, 80, 80);
	if popup.width < 4 || popup.height < 4 {
		return;
	}

	let company = match inquiry.company.as_deref() {
		Some(company) if !company.is_empty() => company.to_string(),
		_ => "—".to_string(),
	};
	let mut lines = vec![
		field("Name", inquiry.name.clone(), theme),
		field("Email", inquiry.email.clone(), theme),
		field("Company", company, theme),
		field("Status", inquiry.effective_status().to_string(), theme),
		field(
			"Received",
			inquiry.created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
			theme,
		),
		field("Subject", inquiry.subject.clone(), theme),
		Line::default(),
	];
	lines.extend(inquiry.message.lines().map(|line| Line::raw(line.to_string())));

	let block = Block::default()
		.borders(Borders::ALL)
		.border_style(theme.border_style())
		.title(format!(" {title} "))
		.title_style(theme.header_style())
		.title_bottom(Line::styled(DETAIL_HINTS, theme.empty_style()));

	frame.render_widget(Clear, popup);
	frame.render_widget(
		Paragraph::new(lines)
			.block(block)
			.wrap(Wrap { trim: false }),
		popup,
	);
}
