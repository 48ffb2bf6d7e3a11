//! View state of the inquiry browser and the transitions that change it.
//!
//! Every mutation goes through [`BrowserState::apply`]. Responses are matched
//! against the sequence stamp of the request that produced them: anything
//! older than the newest response already applied is discarded, so a slow
//! stale request can never overwrite fresher data.

use crate::client::PageRequest;
use crate::error::FetchError;
use crate::model::{Inquiry, PaginationInfo};
use crate::response::InquiryPage;

/// User-facing category of a failed load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
	/// Network failure, unexpected status, or an unreadable body.
	FetchFailed {
		/// Diagnostic detail for logs; not shown in the banner.
		detail: String,
	},
}

impl LoadError {
	/// Generic message rendered in the error banner.
	#[must_use]
	pub const fn message(&self) -> &'static str {
		match self {
			Self::FetchFailed { .. } => "Failed to load inquiries",
		}
	}
}

impl From<&FetchError> for LoadError {
	fn from(err: &FetchError) -> Self {
		Self::FetchFailed {
			detail: err.to_string(),
		}
	}
}

/// Whether the session is still accepted by the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Session {
	#[default]
	Active,
	/// A request was answered with 401; the user must sign in again.
	LoginRequired,
}

/// Tagged state transitions.
#[derive(Debug)]
pub enum Transition {
	/// A request was handed to the fetch runtime.
	RequestStarted { seq: u64, request: PageRequest },
	/// A request resolved with a decodable page.
	RequestSucceeded { seq: u64, page: InquiryPage },
	/// A request failed for any reason other than a rejected session.
	RequestFailed { seq: u64, error: LoadError },
	/// A request was answered with 401.
	Unauthenticated { seq: u64 },
	/// Show the detail panel for the record at this index of the loaded page.
	DetailOpened(usize),
	/// Hide the detail panel.
	DetailClosed,
}

impl Transition {
	/// Map a finished fetch onto the matching transition.
	#[must_use]
	pub fn from_result(seq: u64, result: Result<InquiryPage, FetchError>) -> Self {
		match result {
			Ok(page) => Self::RequestSucceeded { seq, page },
			Err(FetchError::Unauthenticated) => Self::Unauthenticated { seq },
			Err(err) => Self::RequestFailed {
				seq,
				error: LoadError::from(&err),
			},
		}
	}
}

/// What [`BrowserState::apply`] did with a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
	/// The state changed.
	Updated,
	/// The transition was older than data already on screen and was dropped.
	Stale,
	/// The transition had no effect (e.g. opening a detail for a missing row).
	Ignored,
}

/// Everything the browser shows, in one place.
#[derive(Debug, Clone, Default)]
pub struct BrowserState {
	inquiries: Vec<Inquiry>,
	pagination: PaginationInfo,
	current_page: u32,
	committed_search: String,
	last_request: PageRequest,
	error: Option<LoadError>,
	session: Session,
	/// Id of the record shown in the detail panel.
	detail: Option<String>,
	issued_seq: u64,
	applied_seq: u64,
}

impl BrowserState {
	/// Fresh state with `committed_search` as the initial term.
	#[must_use]
	pub fn new(committed_search: impl Into<String>) -> Self {
		let committed_search = committed_search.into();
		Self {
			current_page: 1,
			last_request: PageRequest::new(1, committed_search.clone()),
			committed_search,
			..Self::default()
		}
	}

	/// Records of the loaded page.
	#[must_use]
	pub fn inquiries(&self) -> &[Inquiry] {
		&self.inquiries
	}

	#[must_use]
	pub fn pagination(&self) -> &PaginationInfo {
		&self.pagination
	}

	/// Page the view believes it is on (synced from the last response).
	#[must_use]
	pub const fn current_page(&self) -> u32 {
		self.current_page
	}

	#[must_use]
	pub fn committed_search(&self) -> &str {
		&self.committed_search
	}

	/// Record a new committed search term. The next fetch must use page 1.
	pub fn commit_search(&mut self, term: impl Into<String>) {
		self.committed_search = term.into();
	}

	/// Parameters of the most recently issued request, replayed by refresh.
	#[must_use]
	pub fn last_request(&self) -> &PageRequest {
		&self.last_request
	}

	#[must_use]
	pub fn error(&self) -> Option<&LoadError> {
		self.error.as_ref()
	}

	#[must_use]
	pub const fn session(&self) -> Session {
		self.session
	}

	/// Whether the newest issued request is still unresolved.
	#[must_use]
	pub const fn is_loading(&self) -> bool {
		self.applied_seq < self.issued_seq
	}

	/// Record shown in the detail panel, if it is open.
	#[must_use]
	pub fn detail(&self) -> Option<&Inquiry> {
		let index = self.detail_index()?;
		self.inquiries.get(index)
	}

	/// Row of the loaded page shown in the detail panel.
	#[must_use]
	pub fn detail_index(&self) -> Option<usize> {
		let id = self.detail.as_deref()?;
		self.inquiries.iter().position(|inquiry| inquiry.id == id)
	}

	#[must_use]
	pub const fn is_detail_open(&self) -> bool {
		self.detail.is_some()
	}

	/// Apply a transition.
	pub fn apply(&mut self, transition: Transition) -> Applied {
		match transition {
			Transition::RequestStarted { seq, request } => {
				self.issued_seq = self.issued_seq.max(seq);
				self.last_request = request;
				Applied::Updated
			}
			Transition::RequestSucceeded { seq, page } => {
				if self.is_stale(seq) {
					return Applied::Stale;
				}
				self.applied_seq = seq;
				let InquiryPage {
					inquiries,
					pagination,
					..
				} = page;
				self.current_page = pagination.current_page;
				self.inquiries = inquiries;
				self.pagination = pagination;
				self.error = None;
				if self.detail_index().is_none() {
					self.detail = None;
				}
				Applied::Updated
			}
			Transition::RequestFailed { seq, error } => {
				if self.is_stale(seq) {
					return Applied::Stale;
				}
				self.applied_seq = seq;
				self.error = Some(error);
				Applied::Updated
			}
			Transition::Unauthenticated { seq } => {
				self.applied_seq = self.applied_seq.max(seq);
				self.session = Session::LoginRequired;
				Applied::Updated
			}
			Transition::DetailOpened(index) => {
				if let Some(inquiry) = self.inquiries.get(index) {
					self.detail = Some(inquiry.id.clone());
					Applied::Updated
				} else {
					Applied::Ignored
				}
			}
			Transition::DetailClosed => {
				if self.detail.take().is_some() {
					Applied::Updated
				} else {
					Applied::Ignored
				}
			}
		}
	}

	fn is_stale(&self, seq: u64) -> bool {
		if seq < self.applied_seq {
			log::warn!(
				"discarding response #{seq}; response #{} is already applied",
				self.applied_seq
			);
			true
		} else {
			false
		}
	}
}
