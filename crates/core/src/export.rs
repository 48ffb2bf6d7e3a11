//! CSV export of the loaded page.
//!
//! Only the records currently on screen are exported; there is no
//! full-dataset export.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::ExportError;
use crate::model::Inquiry;

/// Header row written before the records.
pub const EXPORT_HEADERS: [&str; 8] = [
	"ID",
	"Name",
	"Email",
	"Company",
	"Subject",
	"Message",
	"Status",
	"Created At",
];

/// Render `inquiries` as CSV text.
///
/// Name, subject and message are always quoted, with embedded quotes
/// doubled. The remaining columns are only quoted when they would otherwise
/// break the row.
pub fn inquiries_to_csv(inquiries: &[Inquiry]) -> Result<String, ExportError> {
	let mut lines = Vec::with_capacity(inquiries.len() + 1);
	lines.push(EXPORT_HEADERS.join(","));

	for inquiry in inquiries {
		let fields = [
			encode_field(&inquiry.id, QuoteStyle::Necessary)?,
			encode_field(&inquiry.name, QuoteStyle::Always)?,
			encode_field(&inquiry.email, QuoteStyle::Necessary)?,
			encode_field(inquiry.company_or_empty(), QuoteStyle::Necessary)?,
			encode_field(&inquiry.subject, QuoteStyle::Always)?,
			encode_field(&inquiry.message, QuoteStyle::Always)?,
			encode_field(inquiry.effective_status().as_str(), QuoteStyle::Necessary)?,
			encode_field(&inquiry.created_at_iso(), QuoteStyle::Necessary)?,
		];
		lines.push(fields.join(","));
	}

	Ok(lines.join("\n"))
}

/// File name used for an export taken on `date`.
#[must_use]
pub fn export_file_name(date: NaiveDate) -> String {
	format!("inquiries-{}.csv", date.format("%Y-%m-%d"))
}

/// Write the export for `inquiries` into `directory` and return its path.
pub fn write_export(
	directory: &Path,
	inquiries: &[Inquiry],
	date: NaiveDate,
) -> Result<PathBuf, ExportError> {
	let csv = inquiries_to_csv(inquiries)?;
	fs::create_dir_all(directory)?;
	let path = directory.join(export_file_name(date));
	fs::write(&path, csv)?;
	log::info!("exported {} inquiries to {}", inquiries.len(), path.display());
	Ok(path)
}

/// Encode one value as a CSV field. The record has to be terminated before
/// the writer flushes a quoted field's closing quote, so a one-field record
/// is written and its terminator stripped.
fn encode_field(value: &str, style: QuoteStyle) -> Result<String, ExportError> {
	if value.is_empty() && !matches!(style, QuoteStyle::Always) {
		return Ok(String::new());
	}
	let mut writer = WriterBuilder::new()
		.quote_style(style)
		.terminator(Terminator::Any(b'\n'))
		.from_writer(Vec::new());
	writer.write_record([value])?;
	let mut field = String::from_utf8(writer.into_inner()?)?;
	if field.ends_with('\n') {
		field.pop();
	}
	Ok(field)
}

#[cfg(test)]
mod tests {
	use chrono::{TimeZone, Utc};

	use super::*;
	use crate::model::InquiryStatus;

	fn inquiry() -> Inquiry {
		Inquiry {
			id: "665f1c2e".to_string(),
			name: "Ada Lovelace".to_string(),
			email: "ada@example.com".to_string(),
			company: Some("Analytical Engines".to_string()),
			subject: "Partnership".to_string(),
			message: "We loved the \"difference engine\" demo".to_string(),
			created_at: Utc.with_ymd_and_hms(2024, 6, 1, 8, 15, 0).unwrap(),
			status: Some(InquiryStatus::Replied),
		}
	}

	#[test]
	fn quotes_are_doubled_inside_quoted_fields() {
		let csv = inquiries_to_csv(&[inquiry()]).unwrap();
		insta::assert_snapshot!(csv, @r#"
		ID,Name,Email,Company,Subject,Message,Status,Created At
		665f1c2e,"Ada Lovelace",ada@example.com,Analytical Engines,"Partnership","We loved the ""difference engine"" demo",replied,2024-06-01T08:15:00.000Z
		"#);
	}

	#[test]
	fn missing_company_and_status_use_defaults() {
		let mut record = inquiry();
		record.company = None;
		record.status = None;
		record.message = "Plain".to_string();

		let csv = inquiries_to_csv(&[record]).unwrap();
		let row = csv.lines().nth(1).unwrap();
		assert_eq!(
			row,
			"665f1c2e,\"Ada Lovelace\",ada@example.com,,\"Partnership\",\"Plain\",new,2024-06-01T08:15:00.000Z"
		);
	}

	#[test]
	fn unquoted_columns_are_protected_when_needed() {
		let mut record = inquiry();
		record.company = Some("Engines, Ltd".to_string());
		let csv = inquiries_to_csv(&[record]).unwrap();
		assert!(csv.contains(",\"Engines, Ltd\","));
	}

	#[test]
	fn quoted_message_keeps_its_closing_quote() {
		let mut record = inquiry();
		record.message = "say \"hi\"".to_string();
		record.subject = "Line one\nline two".to_string();
		let csv = inquiries_to_csv(&[record]).unwrap();
		assert!(csv.contains(",\"say \"\"hi\"\"\",replied,"), "{csv}");
		assert!(csv.contains(",\"Line one\nline two\","), "{csv}");
		assert!(csv.ends_with(",2024-06-01T08:15:00.000Z"), "{csv}");
	}

	#[test]
	fn every_field_round_trips_through_a_reader() {
		let mut record = inquiry();
		record.company = Some("Engines, Ltd".to_string());
		let csv = inquiries_to_csv(&[record.clone()]).unwrap();
		let mut reader = csv::Reader::from_reader(csv.as_bytes());
		let row = reader.records().next().unwrap().unwrap();
		assert_eq!(row.len(), EXPORT_HEADERS.len());
		assert_eq!(&row[1], "Ada Lovelace");
		assert_eq!(&row[3], "Engines, Ltd");
		assert_eq!(&row[5], record.message);
	}

	#[test]
	fn empty_page_exports_only_the_header() {
		let csv = inquiries_to_csv(&[]).unwrap();
		assert_eq!(csv, EXPORT_HEADERS.join(","));
	}

	#[test]
	fn export_is_written_with_a_dated_name() {
		let dir = tempfile::tempdir().unwrap();
		let date = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
		let path = write_export(dir.path(), &[inquiry()], date).unwrap();
		assert_eq!(path, dir.path().join("inquiries-2024-06-02.csv"));
		let written = fs::read_to_string(path).unwrap();
		assert!(written.starts_with("ID,Name,Email"));
	}
}
