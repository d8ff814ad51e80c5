//! Date helpers: CLI dates are calendar days stored as UTC midnight.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, TimeZone, Utc};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Epoch milliseconds of the date's midnight UTC.
pub fn date_to_millis(date: NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp_millis())
        .unwrap_or_default()
}

/// Parse a `YYYY-MM-DD` argument straight to epoch milliseconds.
pub fn parse_date_millis(s: &str) -> AppResult<i64> {
    parse_date(s)
        .map(date_to_millis)
        .ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// Reference instant for age computations: the given date, or now.
pub fn reference_millis(today: Option<&str>) -> AppResult<i64> {
    match today {
        Some(s) => parse_date_millis(s),
        None => Ok(Utc::now().timestamp_millis()),
    }
}

/// `YYYY-MM-DD` for an epoch milliseconds value, or the raw number when
/// it is outside the representable range.
pub fn format_iso(millis: i64) -> String {
    match Utc.timestamp_millis_opt(millis).single() {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => millis.to_string(),
    }
}
