/// Human-readable labels rendered around the inquiry table.
#[derive(Debug, Clone)]
pub struct UiLabels {
	/// Title shown before the search prompt.
	pub input_title: String,
	/// Dimmed text shown while the prompt is empty.
	pub placeholder: String,
	/// Title rendered above the table.
	pub table_title: String,
	/// Title of the detail panel.
	pub detail_title: String,
	/// Noun used in the record counter, e.g. "42 inquiries".
	pub count_label: String,
	/// Message shown when a page loaded but holds no records.
	pub empty_label: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			input_title: "Search".to_string(),
			placeholder: "Search by name, email, company, or subject".to_string(),
			table_title: "Inquiries".to_string(),
			detail_title: "Inquiry details".to_string(),
			count_label: "inquiries".to_string(),
			empty_label: "No inquiries found".to_string(),
		}
	}
}

impl UiLabels {
	/// Replace the prompt title, keeping every other label.
	#[must_use]
	pub fn with_input_title(mut self, title: impl Into<String>) -> Self {
		self.input_title = title.into();
		self
	}
}
