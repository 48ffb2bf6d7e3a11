use std::sync::mpsc::TryRecvError;
use std::time::Instant;

use inqdesk_core::worker::FetchResponse;
use inqdesk_core::{Applied, PageNav, PageRequest, Session, Transition};

use super::{App, BrowserOutcome};

impl<'a> App<'a> {
	/// Issue the initial fetch for page 1 and the starting term. Only the
	/// first call has any effect.
	pub fn start(&mut self) {
		if self.started {
			return;
		}
		self.started = true;
		self.load_page(1);
	}

	/// Fetch `page` with the committed search term.
	pub(crate) fn load_page(&mut self, page: u32) {
		let request = PageRequest::new(page, self.browser.committed_search());
		self.issue(request);
	}

	/// Replay the last issued request.
	pub(crate) fn refresh(&mut self) {
		let request = self.browser.last_request().clone();
		self.issue(request);
	}

	/// Follow a navigation action; disabled actions issue nothing.
	pub(crate) fn navigate(&mut self, nav: PageNav) {
		match nav.target(self.browser.pagination()) {
			Some(page) => {
				self.load_page(page);
				self.select_first();
			}
			None => log::debug!("{} page is unavailable", nav.label()),
		}
	}

	fn issue(&mut self, request: PageRequest) {
		let seq = self.fetch.issue(request.clone());
		self.browser
			.apply(Transition::RequestStarted { seq, request });
	}

	/// Advance time-driven work: commit a settled search term and apply any
	/// finished responses.
	pub fn tick(&mut self, now: Instant) -> Option<BrowserOutcome> {
		if let Some(term) = self.debounce.poll(now) {
			log::debug!("search committed: {term:?}");
			self.browser.commit_search(term);
			self.load_page(1);
			self.select_first();
		}

		self.pump_fetch_results();

		match self.browser.session() {
			Session::LoginRequired => Some(BrowserOutcome::LoginRequired {
				login_url: self.login_url.clone(),
			}),
			Session::Active => None,
		}
	}

	/// Drain responses waiting on the fetch runtime.
	pub(crate) fn pump_fetch_results(&mut self) {
		loop {
			match self.fetch.try_recv() {
				Ok(response) => self.handle_fetch_response(response),
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => break,
			}
		}
	}

	fn handle_fetch_response(&mut self, response: FetchResponse) {
		let FetchResponse {
			seq,
			request,
			result,
		} = response;
		match &result {
			Ok(page) => log::debug!(
				"request #{seq} returned {} inquiries ({} response)",
				page.inquiries.len(),
				page.shape.label()
			),
			Err(err) => log::error!(
				"request #{seq} (page {}, search {:?}) failed: {err}",
				request.page,
				request.search
			),
		}
		match self.browser.apply(Transition::from_result(seq, result)) {
			Applied::Updated => self.ensure_selection(),
			Applied::Stale | Applied::Ignored => {}
		}
	}

	fn select_first(&mut self) {
		self.table_state.select(Some(0));
		*self.table_state.offset_mut() = 0;
	}

	/// Keep the highlighted row inside the loaded page, on the record shown
	/// in the detail panel when one is open.
	pub(crate) fn ensure_selection(&mut self) {
		if let Some(index) = self.browser.detail_index() {
			self.table_state.select(Some(index));
			return;
		}
		let len = self.browser.inquiries().len();
		if len == 0 {
			self.table_state.select(None);
			return;
		}
		let selected = self.table_state.selected().unwrap_or(0).min(len - 1);
		self.table_state.select(Some(selected));
	}
}
