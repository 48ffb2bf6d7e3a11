use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin};

use super::App;
use crate::components::{
	FooterContext, InputContext, ProgressState, TableContext, render_detail, render_error_banner,
	render_footer, render_input, render_table,
};

impl App<'_> {
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let banner_height = u16::from(self.browser.error().is_some());
		let [prompt_area, banner_area, table_area, footer_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(banner_height),
			Constraint::Min(1),
			Constraint::Length(1),
		])
		.areas(area);

		let progress_text = self.progress_text();
		let progress_complete = !self.browser.is_loading() && !self.debounce.is_searching();
		render_input(
			frame,
			InputContext {
				search_input: &self.search_input,
				title: &self.ui.input_title,
				placeholder: Some(&self.ui.placeholder),
				area: prompt_area,
				theme: &self.theme,
			},
			ProgressState {
				progress_text: &progress_text,
				progress_complete,
				throbber_state: &self.throbber_state,
			},
		);

		if let Some(error) = self.browser.error() {
			render_error_banner(frame, error.message(), banner_area, &self.theme);
		}

		let committed = self.browser.committed_search();
		render_table(
			frame,
			&mut self.table_state,
			TableContext {
				inquiries: self.browser.inquiries(),
				needle: (!committed.is_empty()).then_some(committed),
				title: &self.ui.table_title,
				empty_label: &self.ui.empty_label,
				area: table_area,
				theme: &self.theme,
			},
		);

		render_footer(
			frame,
			FooterContext {
				pagination: self.browser.pagination(),
				count_label: &self.ui.count_label,
				status: self.status.as_deref(),
				area: footer_area,
				theme: &self.theme,
			},
		);

		if let Some(inquiry) = self.browser.detail() {
			render_detail(frame, inquiry, &self.ui.detail_title, area, &self.theme);
		}
	}

	fn progress_text(&self) -> String {
		if self.browser.is_loading() {
			"Loading".to_string()
		} else if self.debounce.is_searching() {
			"Searching".to_string()
		} else {
			format!(
				"{}/{}",
				self.browser.inquiries().len(),
				self.browser.pagination().total_count
			)
		}
	}
}
