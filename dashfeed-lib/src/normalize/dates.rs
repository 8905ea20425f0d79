use crate::Result;
use chrono::{DateTime, NaiveDate};
use ohno::bail;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar-date layouts accepted from the sources, tried in order.
///
/// Month names match case-insensitively, so `OCT 31, 2024` and `Oct 31, 2024` both parse.
const DATE_FORMATS: &[&str] = &["%b %d, %Y", "%B %d, %Y", ISO_DATE_FORMAT, "%m/%d/%Y"];

/// Convert a source date string into an ISO-8601 calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns an error if the string matches none of the known date layouts.
pub fn standardize_date_to_iso(raw: &str) -> Result<String> {
    let trimmed = raw.trim();

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date.format(ISO_DATE_FORMAT).to_string());
        }
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.date_naive().format(ISO_DATE_FORMAT).to_string());
    }

    bail!("unrecognized date '{raw}'")
}
