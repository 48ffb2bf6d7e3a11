//! Normalisation of listing responses.
//!
//! The endpoint answers in one of two layouts. Newer deployments wrap the
//! records together with paging metadata:
//!
//! ```json
//! { "data": [ ... ], "pagination": { "currentPage": 1, "totalPages": 3, ... } }
//! ```
//!
//! Older deployments return the bare array. Both are folded into an
//! [`InquiryPage`]; anything else is rejected.

use serde_json::{Map, Value};

use crate::error::FetchError;
use crate::model::{Inquiry, PaginationInfo, WirePagination};

/// Which layout a response arrived in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
	/// `{ data, pagination }`.
	Paged,
	/// A bare array of records.
	Bare,
}

impl ResponseShape {
	#[must_use]
	pub const fn label(self) -> &'static str {
		match self {
			Self::Paged => "paged",
			Self::Bare => "bare array",
		}
	}
}

/// One page of inquiries together with its position in the result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InquiryPage {
	pub inquiries: Vec<Inquiry>,
	pub pagination: PaginationInfo,
	pub shape: ResponseShape,
}

impl InquiryPage {
	/// Wrap a list that carried no paging metadata.
	#[must_use]
	pub fn bare(inquiries: Vec<Inquiry>) -> Self {
		let pagination = PaginationInfo::single_page(inquiries.len());
		Self {
			inquiries,
			pagination,
			shape: ResponseShape::Bare,
		}
	}

	/// Wrap a list with the pagination reported by the server.
	#[must_use]
	pub fn paged(inquiries: Vec<Inquiry>, pagination: PaginationInfo) -> Self {
		Self {
			inquiries,
			pagination,
			shape: ResponseShape::Paged,
		}
	}
}

/// Decode a successful response body.
pub fn parse_list_response(body: &[u8]) -> Result<InquiryPage, FetchError> {
	let value: Value = serde_json::from_slice(body)
		.map_err(|err| FetchError::Malformed(format!("body is not JSON: {err}")))?;

	match value {
		Value::Array(items) => decode_records(items).map(InquiryPage::bare),
		Value::Object(object) => parse_paged(object),
		other => Err(FetchError::Malformed(format!(
			"expected an object or an array, found {}",
			kind_of(&other)
		))),
	}
}

fn parse_paged(mut object: Map<String, Value>) -> Result<InquiryPage, FetchError> {
	let data = object
		.remove("data")
		.ok_or_else(|| FetchError::Malformed("object is missing `data`".to_string()))?;
	let pagination = object
		.remove("pagination")
		.ok_or_else(|| FetchError::Malformed("object is missing `pagination`".to_string()))?;

	let Value::Array(items) = data else {
		return Err(FetchError::Malformed(format!(
			"`data` must be an array, found {}",
			kind_of(&data)
		)));
	};

	let inquiries = decode_records(items)?;
	let pagination: WirePagination = serde_json::from_value(pagination)
		.map_err(|err| FetchError::Malformed(format!("invalid `pagination`: {err}")))?;

	Ok(InquiryPage::paged(inquiries, pagination.into()))
}

fn decode_records(items: Vec<Value>) -> Result<Vec<Inquiry>, FetchError> {
	items
		.into_iter()
		.enumerate()
		.map(|(index, item)| {
			serde_json::from_value(item)
				.map_err(|err| FetchError::Malformed(format!("record {index}: {err}")))
		})
		.collect()
}

const fn kind_of(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn record(id: &str) -> String {
		format!(
			r#"{{"id":"{id}","name":"Grace","email":"grace@example.com","subject":"Quote","message":"Need a quote","createdAt":"2024-03-02T09:30:00Z","status":"read"}}"#
		)
	}

	#[test]
	fn paged_shape_adopts_server_pagination() {
		let body = format!(
			r#"{{"data":[{}],"pagination":{{"currentPage":3,"totalPages":7,"totalCount":61,"limit":10,"hasNextPage":true,"hasPreviousPage":true}}}}"#,
			record("a")
		);
		let page = parse_list_response(body.as_bytes()).unwrap();
		assert_eq!(page.shape, ResponseShape::Paged);
		assert_eq!(page.inquiries.len(), 1);
		assert_eq!(page.pagination, PaginationInfo::new(3, 7, 61, 10));
	}

	#[test]
	fn bare_array_synthesises_a_single_page() {
		let body = format!(
			"[{},{},{},{}]",
			record("a"),
			record("b"),
			record("c"),
			record("d")
		);
		let page = parse_list_response(body.as_bytes()).unwrap();
		assert_eq!(page.shape, ResponseShape::Bare);
		assert_eq!(page.pagination.total_pages, 1);
		assert_eq!(page.pagination.total_count, 4);
		assert!(!page.pagination.has_next_page);
		assert!(!page.pagination.has_previous_page);
	}

	#[test]
	fn other_shapes_fail_closed() {
		for body in [
			"null",
			"42",
			r#""text""#,
			r#"{"items":[]}"#,
			r#"{"data":{},"pagination":{"currentPage":1,"totalPages":1,"totalCount":0}}"#,
			r#"{"data":[],"pagination":"one"}"#,
			"not json",
		] {
			let err = parse_list_response(body.as_bytes()).unwrap_err();
			assert!(
				matches!(err, FetchError::Malformed(_)),
				"expected malformed error for {body}, got {err:?}"
			);
		}
	}

	#[test]
	fn a_single_bad_record_rejects_the_page() {
		let body = format!(r#"[{},{{"id":"x"}}]"#, record("a"));
		let err = parse_list_response(body.as_bytes()).unwrap_err();
		let FetchError::Malformed(message) = err else {
			panic!("expected malformed error");
		};
		assert!(message.starts_with("record 1"));
	}
}
