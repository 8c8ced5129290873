//! Date helper functions

use chrono::NaiveDate;

/// Format a `YYYY-MM-DD` date in long form (like "March 15, 2024").
///
/// Strings that are not a calendar date are returned unchanged.
pub fn long_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
        Ok(d) => d.format("%B %-d, %Y").to_string(),
        Err(_) => {
            tracing::debug!("Not a calendar date, showing as written: {}", date);
            date.to_string()
        }
    }
}
