//! Datetime helpers
//!
//! Timestamps are persisted as UTC strings in `YYYY-MM-DD HH:MM:SS` form so
//! that lexical order matches chronological order on every backend.

use chrono::{DateTime, NaiveDateTime, Utc};

pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Stored in `soft_deleted_at` for rows that are not deleted.
pub const MAX_DATETIME: &str = "9999-12-31 23:59:59";

pub fn now_datetime_string() -> String {
    to_datetime_string(&Utc::now())
}

pub fn to_datetime_string(value: &DateTime<Utc>) -> String {
    value.format(DATETIME_FORMAT).to_string()
}

/// Parses a stored timestamp. Returns `None` for empty or malformed input.
pub fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, DATETIME_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}
