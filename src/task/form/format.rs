//! The fixed timestamp pattern used by form fields.
//!
//! Formatting and parsing share [`DATE_TIME_FORMAT`], so a value survives a
//! round trip at minute precision. Form timestamps are read and written in
//! UTC.

use chrono::{DateTime, NaiveDateTime, Utc};

/// `YYYY-MM-DDTHH:mm`, the value format of a `datetime-local` input.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Formats a timestamp for a form field, dropping seconds.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use task_app::task::form::format::format_date_time;
///
/// let value = Utc.with_ymd_and_hms(2025, 6, 24, 9, 19, 42).single().expect("valid date");
/// assert_eq!(format_date_time(value), "2025-06-24T09:19");
/// ```
#[must_use]
pub fn format_date_time(value: DateTime<Utc>) -> String {
    value.format(DATE_TIME_FORMAT).to_string()
}

/// Parses a form field value; `None` when the text does not match the
/// pattern.
#[must_use]
pub fn parse_date_time(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw.trim(), DATE_TIME_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}
