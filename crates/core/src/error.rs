use std::io;

use thiserror::Error;

/// Failure modes of a single page request.
#[derive(Debug, Error)]
pub enum FetchError {
	/// The server rejected the session with HTTP 401.
	#[error("the server requires a fresh sign-in")]
	Unauthenticated,
	/// Any other non-success status code.
	#[error("the server responded with HTTP {status}")]
	Status {
		/// Numeric status code returned by the server.
		status: u16,
	},
	/// The request never produced a response (DNS, connect, timeout, ...).
	#[error("request failed: {0}")]
	Transport(#[from] reqwest::Error),
	/// The body was neither a paged object nor a bare list of inquiries.
	#[error("malformed response: {0}")]
	Malformed(String),
	/// The configured endpoint could not be turned into a request URL.
	#[error("invalid endpoint: {0}")]
	Endpoint(#[from] url::ParseError),
}

/// Failure while producing or saving a CSV export.
#[derive(Debug, Error)]
pub enum ExportError {
	#[error("failed to encode CSV: {0}")]
	Csv(#[from] csv::Error),
	#[error("exported CSV was not valid UTF-8")]
	Encoding(#[from] std::string::FromUtf8Error),
	#[error("failed to write export: {0}")]
	Io(#[from] io::Error),
}

impl From<csv::IntoInnerError<csv::Writer<Vec<u8>>>> for ExportError {
	fn from(err: csv::IntoInnerError<csv::Writer<Vec<u8>>>) -> Self {
		Self::Io(err.into_error())
	}
}
