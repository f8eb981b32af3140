//! Time helpers - timestamp parsing in the business time zone
//!
//! Accepted inputs:
//! - RFC 3339 / ISO 8601 with `Z` or a numeric offset
//! - `T` or space separator, optional seconds and fractional seconds
//! - naive date-times, interpreted in the configured zone
//! - bare dates (`YYYY-MM-DD`), meaning local midnight

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::utils::{AppError, AppResult, ErrorCode};

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a timestamp string into UTC
///
/// Returns `None` when no accepted format matches.
pub fn parse_timestamp(raw: &str, tz: Tz) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    // trailing Z is UTC
    let normalized = match s.strip_suffix('Z').or_else(|| s.strip_suffix('z')) {
        Some(head) => format!("{head}+00:00"),
        None => s.to_string(),
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&normalized, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&normalized, fmt) {
            return Some(localize(naive, tz));
        }
    }
    NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| localize(naive, tz))
}

/// Parse a request field, failing with `InvalidDateFormat`
pub fn parse_timestamp_field(raw: &str, tz: Tz, field: &str) -> AppResult<DateTime<Utc>> {
    parse_timestamp(raw, tz).ok_or_else(|| {
        AppError::new(ErrorCode::InvalidDateFormat)
            .with_detail("field", field)
            .with_detail("value", raw)
    })
}

/// Naive local time → UTC (business zone)
///
/// Ambiguous times (DST fold) take the earlier instant.
/// DST gap fallback: a local time that does not exist is read as UTC.
pub fn localize(naive: NaiveDateTime, tz: Tz) -> DateTime<Utc> {
    naive
        .and_local_timezone(tz)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| naive.and_utc())
}
