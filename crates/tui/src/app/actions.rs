use std::time::Instant;

use chrono::Local;
use inqdesk_core::export::write_export;
use inqdesk_core::{PageNav, ReplyDraft, Transition};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, BrowserOutcome};

impl<'a> App<'a> {
	/// Process a key press. Returns an outcome when the browser should stop.
	pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Option<BrowserOutcome> {
		self.status = None;
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

		match key.code {
			KeyCode::Char('c') if ctrl => return Some(BrowserOutcome::Closed),
			KeyCode::Char('r') if ctrl => self.refresh(),
			KeyCode::Char('e') if ctrl => self.export(),
			KeyCode::PageUp => self.navigate(PageNav::Previous),
			KeyCode::PageDown => self.navigate(PageNav::Next),
			KeyCode::Home if ctrl => self.navigate(PageNav::First),
			KeyCode::End if ctrl => self.navigate(PageNav::Last),
			KeyCode::Up => self.move_selection_up(),
			KeyCode::Down => self.move_selection_down(),
			_ if self.browser.is_detail_open() => match key.code {
				KeyCode::Esc => {
					self.browser.apply(Transition::DetailClosed);
				}
				KeyCode::Char('r') => self.reply(),
				_ => {}
			},
			KeyCode::Esc => return Some(BrowserOutcome::Closed),
			KeyCode::Enter => {
				if let Some(index) = self.table_state.selected() {
					self.browser.apply(Transition::DetailOpened(index));
				}
			}
			_ => {
				if self.search_input.input(key) {
					self.debounce
						.input(self.search_input.text().to_string(), now);
				}
			}
		}
		None
	}

	fn move_selection_up(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected > 0
		{
			self.select_row(selected - 1);
		}
	}

	fn move_selection_down(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected + 1 < self.browser.inquiries().len()
		{
			self.select_row(selected + 1);
		}
	}

	fn select_row(&mut self, index: usize) {
		self.table_state.select(Some(index));
		if self.browser.is_detail_open() {
			self.browser.apply(Transition::DetailOpened(index));
		}
	}

	/// Write the loaded page to the export directory.
	pub(crate) fn export(&mut self) {
		let inquiries = self.browser.inquiries();
		let date = Local::now().date_naive();
		self.status = Some(match write_export(&self.export_dir, inquiries, date) {
			Ok(path) => format!("Exported {} inquiries to {}", inquiries.len(), path.display()),
			Err(err) => {
				log::error!("export to {} failed: {err}", self.export_dir.display());
				format!("Export failed: {err}")
			}
		});
	}

	/// Open a pre-filled reply to the inquiry shown in the detail panel.
	pub(crate) fn reply(&mut self) {
		let Some(inquiry) = self.browser.detail() else {
			return;
		};
		let draft = ReplyDraft::for_inquiry(inquiry);
		let uri = draft.mailto_uri();
		self.status = Some(match self.opener.open(&uri) {
			Ok(()) => format!("Opened reply to {}", draft.to),
			Err(err) => {
				log::warn!("could not launch mail client: {err}");
				format!("Could not launch mail client ({err}): {uri}")
			}
		});
	}
}
