use crate::model::PaginationInfo;

/// Page navigation actions offered below the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
	First,
	Previous,
	Next,
	Last,
}

impl PageNav {
	/// Page to fetch for this action, or `None` when the action is disabled.
	///
	/// First/Previous require `has_previous_page`; Next/Last require
	/// `has_next_page`.
	#[must_use]
	pub fn target(self, pagination: &PaginationInfo) -> Option<u32> {
		let current = pagination.current_page;
		match self {
			Self::First if pagination.has_previous_page => Some(1),
			Self::Previous if pagination.has_previous_page => Some(current.saturating_sub(1).max(1)),
			Self::Next if pagination.has_next_page => Some(current.saturating_add(1)),
			Self::Last if pagination.has_next_page => Some(pagination.total_pages),
			_ => None,
		}
	}

	#[must_use]
	pub const fn label(self) -> &'static str {
		match self {
			Self::First => "first",
			Self::Previous => "previous",
			Self::Next => "next",
			Self::Last => "last",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::PAGE_LIMIT;

	#[test]
	fn first_page_disables_backward_navigation() {
		let pagination = PaginationInfo::new(1, 4, 35, PAGE_LIMIT);
		assert_eq!(PageNav::First.target(&pagination), None);
		assert_eq!(PageNav::Previous.target(&pagination), None);
		assert_eq!(PageNav::Next.target(&pagination), Some(2));
		assert_eq!(PageNav::Last.target(&pagination), Some(4));
	}

	#[test]
	fn last_page_disables_forward_navigation() {
		let pagination = PaginationInfo::new(4, 4, 35, PAGE_LIMIT);
		assert_eq!(PageNav::First.target(&pagination), Some(1));
		assert_eq!(PageNav::Previous.target(&pagination), Some(3));
		assert_eq!(PageNav::Next.target(&pagination), None);
		assert_eq!(PageNav::Last.target(&pagination), None);
	}

	#[test]
	fn single_page_disables_everything() {
		let pagination = PaginationInfo::single_page(4);
		for nav in [PageNav::First, PageNav::Previous, PageNav::Next, PageNav::Last] {
			assert_eq!(nav.target(&pagination), None, "{} should be disabled", nav.label());
		}
	}
}
