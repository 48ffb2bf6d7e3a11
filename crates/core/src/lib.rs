//! Data model, fetching, and view-state logic behind the `inqdesk` inquiry
//! browser.
//!
//! The terminal front-end lives in `inqdesk-tui`; everything here is
//! independent of rendering so it can be exercised directly in tests.

pub mod app_dirs;
pub mod client;
pub mod debounce;
mod error;
pub mod export;
pub mod model;
pub mod navigation;
pub mod opener;
pub mod reply;
pub mod response;
pub mod state;
pub mod worker;

pub use client::{HttpInquirySource, HttpSourceOptions, InquirySource, PageRequest};
pub use debounce::{SEARCH_QUIET_PERIOD, SearchDebouncer};
pub use error::{ExportError, FetchError};
pub use model::{Inquiry, InquiryStatus, PAGE_LIMIT, PaginationInfo};
pub use navigation::PageNav;
pub use reply::ReplyDraft;
pub use response::{InquiryPage, ResponseShape};
pub use state::{Applied, BrowserState, LoadError, Session, Transition};
pub use worker::FetchRuntime;
