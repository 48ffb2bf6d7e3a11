//! Records and pagination metadata served by the inquiry listing endpoint.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Number of records requested per page.
pub const PAGE_LIMIT: u32 = 10;

/// Processing state attached to an inquiry by the back office.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
	/// Not yet looked at. Records without a status are treated as new.
	#[default]
	New,
	/// Opened by an administrator.
	Read,
	/// Answered.
	Replied,
}

impl InquiryStatus {
	/// Lowercase label used on screen and in exports.
	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::New => "new",
			Self::Read => "read",
			Self::Replied => "replied",
		}
	}
}

impl fmt::Display for InquiryStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// One customer-submitted contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
	#[serde(alias = "_id")]
	pub id: String,
	pub name: String,
	pub email: String,
	#[serde(default)]
	pub company: Option<String>,
	pub subject: String,
	pub message: String,
	pub created_at: DateTime<Utc>,
	#[serde(default)]
	pub status: Option<InquiryStatus>,
}

impl Inquiry {
	/// Status with the implicit `new` default applied.
	#[must_use]
	pub fn effective_status(&self) -> InquiryStatus {
		self.status.unwrap_or_default()
	}

	/// Company name, or an empty string when the sender left it blank.
	#[must_use]
	pub fn company_or_empty(&self) -> &str {
		self.company.as_deref().unwrap_or("")
	}

	/// Creation time in the ISO 8601 form used by exports.
	#[must_use]
	pub fn created_at_iso(&self) -> String {
		self.created_at.to_rfc3339_opts(SecondsFormat::Millis, true)
	}
}

/// Position of the loaded page within the full result set.
///
/// `has_next_page` and `has_previous_page` are always derived from
/// `current_page` and `total_pages`; they are never taken on trust.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
	pub current_page: u32,
	pub total_pages: u32,
	pub total_count: u64,
	pub limit: u32,
	pub has_next_page: bool,
	pub has_previous_page: bool,
}

impl PaginationInfo {
	/// Build pagination metadata, deriving the navigation flags.
	#[must_use]
	pub const fn new(current_page: u32, total_pages: u32, total_count: u64, limit: u32) -> Self {
		Self {
			current_page,
			total_pages,
			total_count,
			limit,
			has_next_page: current_page < total_pages,
			has_previous_page: current_page > 1,
		}
	}

	/// Pagination for a list that arrived without any paging metadata.
	#[must_use]
	pub fn single_page(count: usize) -> Self {
		Self::new(1, 1, count as u64, PAGE_LIMIT)
	}

	/// Placeholder shown before the first response arrives.
	#[must_use]
	pub const fn initial() -> Self {
		Self::new(1, 1, 0, PAGE_LIMIT)
	}
}

impl Default for PaginationInfo {
	fn default() -> Self {
		Self::initial()
	}
}

/// Pagination object exactly as the server encodes it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WirePagination {
	pub(crate) current_page: u32,
	pub(crate) total_pages: u32,
	pub(crate) total_count: u64,
	#[serde(default = "default_limit")]
	pub(crate) limit: u32,
	#[serde(default)]
	pub(crate) has_next_page: Option<bool>,
	#[serde(default, alias = "hasPrevPage")]
	pub(crate) has_previous_page: Option<bool>,
}

const fn default_limit() -> u32 {
	PAGE_LIMIT
}

impl From<WirePagination> for PaginationInfo {
	fn from(wire: WirePagination) -> Self {
		let derived = Self::new(
			wire.current_page,
			wire.total_pages,
			wire.total_count,
			wire.limit,
		);
		let disagrees = wire
			.has_next_page
			.is_some_and(|flag| flag != derived.has_next_page)
			|| wire
				.has_previous_page
				.is_some_and(|flag| flag != derived.has_previous_page);
		if disagrees {
			log::warn!(
				"server pagination flags disagree with page {} of {}; using derived flags",
				derived.current_page,
				derived.total_pages
			);
		}
		derived
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn flags_follow_page_position() {
		let first = PaginationInfo::new(1, 3, 25, PAGE_LIMIT);
		assert!(!first.has_previous_page);
		assert!(first.has_next_page);

		let last = PaginationInfo::new(3, 3, 25, PAGE_LIMIT);
		assert!(last.has_previous_page);
		assert!(!last.has_next_page);

		let empty = PaginationInfo::new(1, 0, 0, PAGE_LIMIT);
		assert!(!empty.has_previous_page);
		assert!(!empty.has_next_page);
	}

	#[test]
	fn wire_flags_are_recomputed() {
		let wire: WirePagination = serde_json::from_str(
			r#"{"currentPage":2,"totalPages":2,"totalCount":14,"limit":10,"hasNextPage":true,"hasPrevPage":false}"#,
		)
		.unwrap();
		let pagination = PaginationInfo::from(wire);
		assert!(!pagination.has_next_page);
		assert!(pagination.has_previous_page);
	}

	#[test]
	fn inquiry_accepts_mongo_style_id_and_missing_optionals() {
		let inquiry: Inquiry = serde_json::from_str(
			r#"{"_id":"abc","name":"Ada","email":"ada@example.com","subject":"Hi","message":"Hello","createdAt":"2024-05-01T10:00:00.000Z"}"#,
		)
		.unwrap();
		assert_eq!(inquiry.id, "abc");
		assert_eq!(inquiry.company_or_empty(), "");
		assert_eq!(inquiry.effective_status(), InquiryStatus::New);
		assert_eq!(inquiry.created_at_iso(), "2024-05-01T10:00:00.000Z");
	}

	#[test]
	fn unknown_status_is_rejected() {
		let result = serde_json::from_str::<Inquiry>(
			r#"{"id":"1","name":"A","email":"a@b.c","subject":"s","message":"m","createdAt":"2024-05-01T10:00:00Z","status":"archived"}"#,
		);
		assert!(result.is_err());
	}
}
