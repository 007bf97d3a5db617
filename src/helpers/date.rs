//! Date helper functions

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;

/// Used when a configured format cannot be turned into a valid chrono format
const FALLBACK_FORMAT: &str = "%Y-%m-%d";

/// Format a date using a Moment.js-style format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "MMMM D, YYYY") // -> "January 1, 2023"
/// ```
pub fn format_date(date: &NaiveDate, format: &str) -> String {
    format_chrono(date, &moment_to_chrono_format(format))
}

/// Format with a chrono format string, falling back to `YYYY-MM-DD` if it is invalid
fn format_chrono(date: &NaiveDate, format: &str) -> String {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        tracing::warn!("Invalid date format {:?}, using {:?}", format, FALLBACK_FORMAT);
        return date.format(FALLBACK_FORMAT).to_string();
    }
    date.format_with_items(StrftimeItems::new(format)).to_string()
}

/// Format a date as `YYYY-MM-DD`, for `datetime` attributes
pub fn date_iso(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Convert a Moment.js format to a chrono format
fn moment_to_chrono_format(format: &str) -> String {
    // Longest tokens first within each family
    let replacements = [
        ("YYYY", "%Y"),
        ("YY", "%y"),
        ("MMMM", "%B"),
        ("MMM", "%b"),
        ("MM", "%m"),
        ("DDDD", "%j"),
        ("DD", "%d"),
        ("D", "%-d"),
        ("dddd", "%A"),
        ("ddd", "%a"),
    ];

    // Moment has no `%` specifiers, so any `%` is literal text
    let mut result = format.replace('%', "%%");
    for (from, to) in replacements {
        result = result.replace(from, to);
    }
    result
}
