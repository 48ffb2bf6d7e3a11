use inqdesk_core::PaginationInfo;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;

const KEY_HINTS: &str = "PgUp/PgDn page · ^Home/^End first/last · Enter details · ^R refresh · ^E export · Esc quit";

/// Everything the footer row needs from the app.
pub struct FooterContext<'a> {
	pub pagination: &'a PaginationInfo,
	pub count_label: &'a str,
	/// Transient message replacing the key hints.
	pub status: Option<&'a str>,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// "Page X of Y" as reported by the server.
#[must_use]
pub fn page_label(pagination: &PaginationInfo) -> String {
	format!(
		"Page {} of {}",
		pagination.current_page, pagination.total_pages
	)
}

/// Render the pagination summary on the left and hints or status on the right.
pub fn render_footer(frame: &mut Frame, context: FooterContext<'_>) {
	let FooterContext {
		pagination,
		count_label,
		status,
		area,
		theme,
	} = context;
	if area.width == 0 || area.height == 0 {
		return;
	}

	let summary = format!(
		"{} · {} {count_label}",
		page_label(pagination),
		pagination.total_count
	);
	let summary_width = summary.width() as u16;
	frame.render_widget(
		Paragraph::new(Line::from(Span::styled(summary, theme.header_style()))),
		area,
	);

	let right = status.unwrap_or(KEY_HINTS);
	let right_area = Rect {
		x: area.x.saturating_add(summary_width + 3),
		width: area.width.saturating_sub(summary_width + 3),
		..area
	};
	if right_area.width > 0 {
		frame.render_widget(
			Paragraph::new(right)
				.alignment(Alignment::Right)
				.style(theme.empty_style()),
			right_area,
		);
	}
}

/// One-line banner for a failed load.
pub fn render_error_banner(frame: &mut Frame, message: &str, area: Rect, theme: &Theme) {
	let line = Line::from(vec![
		Span::styled(format!("✖ {message}."), theme.error_style()),
		Span::styled(" Press Ctrl+R to retry.", theme.empty_style()),
	]);
	frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn page_label_reads_server_values() {
		let pagination = PaginationInfo::new(3, 7, 61, 10);
		assert_eq!(page_label(&pagination), "Page 3 of 7");
	}
}
