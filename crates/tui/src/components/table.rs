use inqdesk_core::Inquiry;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::widgets::{Block, Borders, Cell, Clear, HighlightSpacing, Paragraph, Row, Table, TableState};

use super::rows::build_inquiry_rows;
use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
const TABLE_COLUMN_SPACING: u16 = 1;
const HEADERS: [&str; 6] = ["Received", "Name", "Email", "Company", "Subject", "Status"];

/// Everything the table needs from the app.
pub struct TableContext<'a> {
	pub inquiries: &'a [Inquiry],
	/// Committed search term to highlight, if any.
	pub needle: Option<&'a str>,
	pub title: &'a str,
	/// Shown instead of rows when the page is empty.
	pub empty_label: &'a str,
	pub area: Rect,
	pub theme: &'a Theme,
}

fn column_widths() -> [Constraint; 6] {
	[
		Constraint::Length(16),
		Constraint::Percentage(16),
		Constraint::Percentage(22),
		Constraint::Percentage(14),
		Constraint::Fill(1),
		Constraint::Length(7),
	]
}

/// Render the loaded page as a bordered table.
pub fn render_table(frame: &mut Frame, table_state: &mut TableState, context: TableContext<'_>) {
	let TableContext {
		inquiries,
		needle,
		title,
		empty_label,
		area,
		theme,
	} = context;

	let block = Block::default()
		.borders(Borders::ALL)
		.border_style(theme.border_style())
		.title(format!(" {title} "))
		.title_style(theme.header_style());

	let header = Row::new(HEADERS.into_iter().map(Cell::from))
		.style(theme.header_style())
		.height(1);
	let rows = build_inquiry_rows(inquiries, needle, theme.highlight_style());

	let table = Table::new(rows, column_widths())
		.header(header)
		.block(block)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::WhenSelected)
		.row_highlight_style(theme.row_highlight_style())
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, area, table_state);

	if inquiries.is_empty() {
		let inner = Rect {
			x: area.x.saturating_add(1),
			y: area.y.saturating_add(2),
			width: area.width.saturating_sub(2),
			height: area.height.saturating_sub(3),
		};
		if inner.width > 0 && inner.height > 0 {
			let empty = Paragraph::new(empty_label)
				.alignment(Alignment::Center)
				.style(theme.empty_style());
			frame.render_widget(Clear, inner);
			frame.render_widget(empty, inner);
		}
	}
}
