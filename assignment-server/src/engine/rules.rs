//! Pure rules shared by every engine operation

use chrono::{DateTime, Utc};
use serde_json::Value;

/// Lowest accepted evaluation score
pub const MIN_SCORE: f64 = 0.0;
/// Highest accepted evaluation score
pub const MAX_SCORE: f64 = 5.0;

/// Why a raw score was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreError {
    /// Not a number, nor a string holding one
    NotNumber,
    /// Numeric but outside `[0, 5]`
    OutOfRange,
}

/// Signed microseconds between start and end, `None` while the record is open
pub fn derive_duration(start: DateTime<Utc>, end: Option<DateTime<Utc>>) -> Option<i64> {
    end.and_then(|end| (end - start).num_microseconds())
}

/// Parse a raw JSON score
///
/// Numbers and numeric strings are accepted; the range check runs on the
/// value as sent and the stored value is rounded to two decimals.
pub fn parse_score(raw: &Value) -> Result<f64, ScoreError> {
    let value = match raw {
        Value::Number(n) => n.as_f64().ok_or(ScoreError::NotNumber)?,
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| ScoreError::NotNumber)?,
        _ => return Err(ScoreError::NotNumber),
    };
    if !value.is_finite() {
        return Err(ScoreError::NotNumber);
    }
    if !(MIN_SCORE..=MAX_SCORE).contains(&value) {
        return Err(ScoreError::OutOfRange);
    }
    Ok((value * 100.0).round() / 100.0)
}
