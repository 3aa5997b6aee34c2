//! Epoch-seconds timestamp conversions
//!
//! Timestamps travel as JSON numbers holding seconds since the Unix epoch, with up to
//! millisecond precision in the fractional part.

use chrono::{DateTime, Utc};

/// Seconds since the epoch, truncated to millisecond precision
pub fn epoch_seconds(value: &DateTime<Utc>) -> f64 {
    value.timestamp_millis() as f64 / 1000.0
}

/// Timestamp from seconds since the epoch, rounded to the nearest millisecond
///
/// Returns `None` for non-finite input or values outside the representable range.
pub fn from_epoch_seconds(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    let millis = (seconds * 1000.0).round();
    if millis < i64::MIN as f64 || millis > i64::MAX as f64 {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(millis as i64)
}

/// Timestamp from a string holding either epoch seconds or an RFC 3339 date
pub(crate) fn parse_timestamp_str(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if let Ok(seconds) = trimmed.parse::<f64>() {
        return from_epoch_seconds(seconds);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

#[cfg(test)]
#[path = "timestamp/timestamp_tests.rs"]
mod timestamp_tests;
