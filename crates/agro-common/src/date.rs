//! Calendar date parsing for request parameters.

use chrono::NaiveDate;

use crate::error::AgroError;

/// The only accepted date layout, both in and out.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` string into a calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate, AgroError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|e| {
        AgroError::input(format!(
            "time data '{}' does not match format 'YYYY-MM-DD' ({})",
            s, e
        ))
    })
}

/// Format a date back into `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
