//! HTTP access to the inquiry listing endpoint.

use std::io::Read;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use url::Url;

use crate::error::FetchError;
use crate::model::PAGE_LIMIT;
use crate::response::{InquiryPage, parse_list_response};

/// Path of the listing endpoint relative to the base URL.
pub const LIST_PATH: &str = "api/contact";
/// Path of the sign-in page relative to the base URL.
pub const LOGIN_PATH: &str = "admin/login";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Parameters of a single listing request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
	/// 1-based page number.
	pub page: u32,
	/// Committed search term; omitted from the query when empty.
	pub search: String,
}

impl PageRequest {
	#[must_use]
	pub fn new(page: u32, search: impl Into<String>) -> Self {
		Self {
			page: page.max(1),
			search: search.into(),
		}
	}

	/// Query string pairs in the order the endpoint documents them.
	#[must_use]
	pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
		let mut pairs = vec![
			("page", self.page.to_string()),
			("limit", PAGE_LIMIT.to_string()),
		];
		if !self.search.is_empty() {
			pairs.push(("search", self.search.clone()));
		}
		pairs
	}
}

/// Anything that can resolve a [`PageRequest`] into a page of inquiries.
///
/// The terminal app only talks to this trait so tests can substitute an
/// in-memory source for the HTTP one.
pub trait InquirySource: Send + Sync + 'static {
	fn fetch_page(&self, request: &PageRequest) -> Result<InquiryPage, FetchError>;
}

/// Options for [`HttpInquirySource`].
#[derive(Debug, Clone)]
pub struct HttpSourceOptions {
	/// Bearer token forwarded with every request.
	pub token: Option<String>,
	/// Per-request timeout.
	pub timeout: Duration,
}

impl Default for HttpSourceOptions {
	fn default() -> Self {
		Self {
			token: None,
			timeout: DEFAULT_TIMEOUT,
		}
	}
}

/// [`InquirySource`] backed by `GET {base}/api/contact`.
#[derive(Debug, Clone)]
pub struct HttpInquirySource {
	client: Client,
	endpoint: Url,
	login_url: Url,
	token: Option<String>,
}

impl HttpInquirySource {
	/// Build a source for the deployment rooted at `base_url`.
	pub fn new(base_url: &Url, options: HttpSourceOptions) -> Result<Self, FetchError> {
		let client = Client::builder().timeout(options.timeout).build()?;
		Self::with_client(client, base_url, options.token)
	}

	/// Build a source around a preconfigured client.
	pub fn with_client(
		client: Client,
		base_url: &Url,
		token: Option<String>,
	) -> Result<Self, FetchError> {
		let base = directory_url(base_url);
		Ok(Self {
			client,
			endpoint: base.join(LIST_PATH)?,
			login_url: base.join(LOGIN_PATH)?,
			token: token.filter(|token| !token.trim().is_empty()),
		})
	}

	/// Fully qualified URL of the listing endpoint.
	#[must_use]
	pub fn endpoint(&self) -> &Url {
		&self.endpoint
	}

	/// Where the user has to go when the session is rejected.
	#[must_use]
	pub fn login_url(&self) -> &Url {
		&self.login_url
	}

	/// Request URL for the given page parameters.
	#[must_use]
	pub fn request_url(&self, request: &PageRequest) -> Url {
		let mut url = self.endpoint.clone();
		url.query_pairs_mut().extend_pairs(request.query_pairs());
		url
	}
}

impl InquirySource for HttpInquirySource {
	fn fetch_page(&self, request: &PageRequest) -> Result<InquiryPage, FetchError> {
		let url = self.request_url(request);
		log::debug!("GET {url}");

		let mut builder = self.client.get(url.as_str()).header(ACCEPT, "application/json");
		if let Some(token) = &self.token {
			builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
		}

		let mut response = builder.send()?;
		let status = response.status();
		if status == StatusCode::UNAUTHORIZED {
			return Err(FetchError::Unauthenticated);
		}
		if !status.is_success() {
			return Err(FetchError::Status {
				status: status.as_u16(),
			});
		}

		let mut body = Vec::new();
		response
			.read_to_end(&mut body)
			.map_err(|err| FetchError::Malformed(format!("failed to read body: {err}")))?;
		parse_list_response(&body)
	}
}

/// Make sure relative joins land below the base path rather than replacing
/// its last segment.
fn directory_url(base: &Url) -> Url {
	let mut base = base.clone();
	if !base.path().ends_with('/') {
		let path = format!("{}/", base.path());
		base.set_path(&path);
	}
	base.set_query(None);
	base.set_fragment(None);
	base
}

#[cfg(test)]
mod tests {
	use std::sync::mpsc;
	use std::thread;

	use tiny_http::{Header, Response, Server};

	use super::*;

	fn serve_once(status: u16, body: &'static str) -> (Url, mpsc::Receiver<(String, Option<String>)>) {
		let server = Server::http("127.0.0.1:0").unwrap();
		let addr = server.server_addr().to_ip().unwrap();
		let (tx, rx) = mpsc::channel();
		thread::spawn(move || {
			if let Ok(request) = server.recv() {
				let auth = request
					.headers()
					.iter()
					.find(|header| header.field.equiv("Authorization"))
					.map(|header| header.value.as_str().to_string());
				let _ = tx.send((request.url().to_string(), auth));
				let response = Response::from_string(body)
					.with_status_code(status)
					.with_header(Header::from_bytes("Content-Type", "application/json").unwrap());
				let _ = request.respond(response);
			}
		});
		(Url::parse(&format!("http://{addr}")).unwrap(), rx)
	}

	#[test]
	fn search_parameter_is_omitted_when_empty() {
		let base = Url::parse("https://example.com/site").unwrap();
		let source = HttpInquirySource::new(&base, HttpSourceOptions::default()).unwrap();

		let url = source.request_url(&PageRequest::new(2, ""));
		assert_eq!(url.as_str(), "https://example.com/site/api/contact?page=2&limit=10");

		let url = source.request_url(&PageRequest::new(1, "acme corp"));
		assert_eq!(
			url.as_str(),
			"https://example.com/site/api/contact?page=1&limit=10&search=acme+corp"
		);
		assert_eq!(source.login_url().as_str(), "https://example.com/site/admin/login");
	}

	#[test]
	fn page_zero_is_clamped() {
		assert_eq!(PageRequest::new(0, "").page, 1);
	}

	#[test]
	fn fetches_paged_response_with_bearer_token() {
		let (base, requests) = serve_once(
			200,
			r#"{"data":[],"pagination":{"currentPage":1,"totalPages":0,"totalCount":0,"limit":10}}"#,
		);
		let options = HttpSourceOptions {
			token: Some("secret".to_string()),
			..HttpSourceOptions::default()
		};
		let source = HttpInquirySource::new(&base, options).unwrap();

		let page = source.fetch_page(&PageRequest::new(1, "")).unwrap();
		assert!(page.inquiries.is_empty());
		assert_eq!(page.pagination.total_pages, 0);

		let (path, auth) = requests.recv().unwrap();
		assert_eq!(path, "/api/contact?page=1&limit=10");
		assert_eq!(auth.as_deref(), Some("Bearer secret"));
	}

	#[test]
	fn unauthorized_maps_to_unauthenticated() {
		let (base, _requests) = serve_once(401, r#"{"error":"unauthorized"}"#);
		let source = HttpInquirySource::new(&base, HttpSourceOptions::default()).unwrap();
		let err = source.fetch_page(&PageRequest::new(1, "")).unwrap_err();
		assert!(matches!(err, FetchError::Unauthenticated), "{err:?}");
	}

	#[test]
	fn server_errors_carry_the_status() {
		let (base, _requests) = serve_once(503, "unavailable");
		let source = HttpInquirySource::new(&base, HttpSourceOptions::default()).unwrap();
		let err = source.fetch_page(&PageRequest::new(1, "")).unwrap_err();
		assert!(matches!(err, FetchError::Status { status: 503 }));
	}

	#[test]
	fn unreachable_server_is_a_transport_error() {
		let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
		let addr = listener.local_addr().unwrap();
		drop(listener);

		let base = Url::parse(&format!("http://{addr}")).unwrap();
		let source = HttpInquirySource::new(
			&base,
			HttpSourceOptions {
				token: None,
				timeout: Duration::from_secs(2),
			},
		)
		.unwrap();
		let err = source.fetch_page(&PageRequest::new(1, "")).unwrap_err();
		assert!(matches!(err, FetchError::Transport(_)));
	}
}
