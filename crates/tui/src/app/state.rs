//! State container for the browser front-end.

use std::path::PathBuf;
use std::sync::Arc;

use inqdesk_core::opener::{SystemOpener, UriOpener};
use inqdesk_core::{BrowserState, FetchRuntime, InquirySource, SearchDebouncer};
use ratatui::widgets::TableState;
use throbber_widgets_tui::ThrobberState;

use crate::config::UiLabels;
use crate::input::QueryInput;
use crate::style::Theme;

/// Why the browser stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserOutcome {
	/// The user quit.
	Closed,
	/// The server rejected the session; the user has to sign in again.
	LoginRequired { login_url: Option<String> },
}

/// Everything the terminal browser needs between frames.
pub struct App<'a> {
	/// Raw text of the search prompt.
	pub search_input: QueryInput<'a>,
	pub(crate) browser: BrowserState,
	pub(crate) debounce: SearchDebouncer,
	pub(crate) fetch: FetchRuntime,
	pub(crate) table_state: TableState,
	pub(crate) ui: UiLabels,
	pub(crate) theme: Theme,
	pub(crate) throbber_state: ThrobberState,
	/// Transient message shown in the footer until the next key press.
	pub(crate) status: Option<String>,
	pub(crate) export_dir: PathBuf,
	pub(crate) login_url: Option<String>,
	pub(crate) opener: Box<dyn UriOpener>,
	pub(crate) started: bool,
}

impl<'a> App<'a> {
	/// Browser reading pages from `source`. Nothing is fetched until
	/// [`App::start`] (or [`App::run`]) is called.
	pub fn new(source: Arc<dyn InquirySource>) -> Self {
		Self {
			search_input: QueryInput::new(""),
			browser: BrowserState::new(""),
			debounce: SearchDebouncer::new(""),
			fetch: FetchRuntime::new(source),
			table_state: TableState::default(),
			ui: UiLabels::default(),
			theme: Theme::default(),
			throbber_state: ThrobberState::default(),
			status: None,
			export_dir: PathBuf::from("."),
			login_url: None,
			opener: Box::new(SystemOpener),
			started: false,
		}
	}

	#[must_use]
	pub fn with_ui_labels(mut self, ui: UiLabels) -> Self {
		self.ui = ui;
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.search_input.set_style(theme.prompt_style());
		self.theme = theme;
		self
	}

	/// Directory CSV exports are written to.
	#[must_use]
	pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
		self.export_dir = dir.into();
		self
	}

	/// Sign-in page reported when the server answers 401.
	#[must_use]
	pub fn with_login_url(mut self, url: impl Into<String>) -> Self {
		self.login_url = Some(url.into());
		self
	}

	#[must_use]
	pub fn with_opener(mut self, opener: Box<dyn UriOpener>) -> Self {
		self.opener = opener;
		self
	}

	/// Start with `query` already committed, so the first fetch uses it.
	#[must_use]
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		let query = query.into();
		self.search_input.set_text(query.clone());
		self.search_input.set_style(self.theme.prompt_style());
		self.debounce = SearchDebouncer::new(query.clone());
		self.browser = BrowserState::new(query);
		self
	}

	/// Read-only view of the reducer state.
	#[must_use]
	pub fn browser(&self) -> &BrowserState {
		&self.browser
	}

	#[must_use]
	pub fn status(&self) -> Option<&str> {
		self.status.as_deref()
	}

	/// Index of the highlighted row.
	#[must_use]
	pub fn selected(&self) -> Option<usize> {
		self.table_state.selected()
	}
}
