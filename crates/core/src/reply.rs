//! Pre-filled replies handed to the user's mail client.

use url::form_urlencoded::byte_serialize;

use crate::model::Inquiry;

/// Contents of a reply composed from an inquiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyDraft {
	pub to: String,
	pub subject: String,
	pub body: String,
}

impl ReplyDraft {
	#[must_use]
	pub fn for_inquiry(inquiry: &Inquiry) -> Self {
		Self {
			to: inquiry.email.clone(),
			subject: format!("Re: {}", inquiry.subject),
			body: format!(
				"Hi {},\n\nThank you for contacting us.\n\n",
				inquiry.name
			),
		}
	}

	/// `mailto:` URI that opens the draft in the default mail client.
	#[must_use]
	pub fn mailto_uri(&self) -> String {
		format!(
			"mailto:{}?subject={}&body={}",
			encode_component(&self.to).replace("%40", "@"),
			encode_component(&self.subject),
			encode_component(&self.body)
		)
	}
}

/// Percent-encode a URI component with `%20` for spaces; mail clients do not
/// agree on reading `+` as a space.
fn encode_component(value: &str) -> String {
	byte_serialize(value.as_bytes())
		.collect::<String>()
		.replace('+', "%20")
}
