//! Calendar month utilities.
//!
//! Fees, payments and reports are keyed by month. A month is always represented as the
//! `NaiveDate` of its first day so that equality comparisons in queries line up.

use chrono::{Datelike, Days, NaiveDate, Utc};

use crate::server::error::validation::ValidationError;

/// Returns the first day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// Returns the first day of the current UTC month.
pub fn current_month() -> NaiveDate {
    month_start(Utc::now().date_naive())
}

/// Parses a month given as `YYYY-MM` or `YYYY-MM-DD`.
///
/// The day component, when present, must be a valid date but is otherwise discarded.
///
/// # Returns
/// - `Ok(NaiveDate)` - First day of the parsed month
/// - `Err(ValidationError::InvalidMonth)` - Input is not a valid month
pub fn parse_month(input: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = input.trim();

    let parsed = match trimmed.len() {
        7 => NaiveDate::parse_from_str(&format!("{}-01", trimmed), "%Y-%m-%d"),
        10 => NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"),
        _ => return Err(ValidationError::InvalidMonth(input.to_string())),
    };

    parsed
        .map(month_start)
        .map_err(|_| ValidationError::InvalidMonth(input.to_string()))
}

/// Formats a month as `YYYY-MM`.
pub fn format_month(month: NaiveDate) -> String {
    month.format("%Y-%m").to_string()
}
