//! Backend timestamp parsing and display.
//!
//! The backend mixes RFC 3339 timestamps (`2024-06-01T12:00:00Z`) with naive
//! ISO ones (`2024-06-01T12:00:00.123456`). Naive values are taken as UTC.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse any timestamp format the backend emits.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Shop-local wall clock time of a backend timestamp.
pub fn to_local(dt: DateTime<Utc>) -> NaiveDateTime {
    dt.with_timezone(&Local).naive_local()
}

/// `dd/mm/yyyy`.
pub fn display_date(dt: &NaiveDateTime) -> String {
    dt.format("%d/%m/%Y").to_string()
}

/// `dd/mm/yyyy HH:MM`, 24h clock, no seconds.
pub fn display_datetime(dt: &NaiveDateTime) -> String {
    dt.format("%d/%m/%Y %H:%M").to_string()
}

/// Local `dd/mm/yyyy` of a raw backend timestamp, or the raw text when it
/// cannot be parsed.
pub fn date_label(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| display_date(&to_local(dt)))
        .unwrap_or_else(|| raw.to_string())
}

/// Local `dd/mm/yyyy HH:MM` of a raw backend timestamp, or the raw text.
pub fn datetime_label(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| display_datetime(&to_local(dt)))
        .unwrap_or_else(|| raw.to_string())
}
