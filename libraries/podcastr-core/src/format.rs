//! Display formatting and lenient parsing for episode fields
//!
//! The episode API is a mock JSON server, so durations arrive as numbers or
//! numeric strings and timestamps with either a `T` or a space separator.

use crate::error::{CoreError, Result};
use chrono::{DateTime, Locale, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

const DISPLAY_LOCALE: Locale = Locale::pt_BR;

/// Naive timestamp layouts accepted besides RFC 3339
const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Format whole seconds as `HH:MM:SS`
///
/// Every part is zero-padded to two digits. Hours are not wrapped, so a
/// 100-hour duration renders as `100:00:00`.
pub fn format_duration(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Coerce a JSON duration to whole seconds
///
/// Accepts non-negative integers, non-negative finite floats (truncated) and
/// strings holding either. Anything else is rejected.
pub fn parse_duration_secs(value: &Value) -> Result<u64> {
    match value {
        Value::Number(number) => {
            if let Some(secs) = number.as_u64() {
                Ok(secs)
            } else if let Some(secs) = number.as_f64() {
                float_to_secs(secs).ok_or_else(|| CoreError::invalid_duration(number))
            } else {
                Err(CoreError::invalid_duration(number))
            }
        }
        Value::String(text) => {
            let text = text.trim();
            if let Ok(secs) = text.parse::<u64>() {
                return Ok(secs);
            }
            text.parse::<f64>()
                .ok()
                .and_then(float_to_secs)
                .ok_or_else(|| CoreError::invalid_duration(format!("{:?}", text)))
        }
        other => Err(CoreError::invalid_duration(other)),
    }
}

fn float_to_secs(secs: f64) -> Option<u64> {
    if secs.is_finite() && secs >= 0.0 && secs < u64::MAX as f64 {
        Some(secs.trunc() as u64)
    } else {
        None
    }
}

/// Parse an API publication timestamp
///
/// RFC 3339 values are converted to UTC; naive values are taken as-is.
/// A bare date is taken as midnight.
pub fn parse_published_at(raw: &str) -> Result<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.naive_utc());
    }

    for layout in TIMESTAMP_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, layout) {
            return Ok(parsed);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| CoreError::invalid_date(raw))
}

/// Format a publication timestamp as `d MMM yy` (`8 jan 21`)
pub fn format_published_at(published_at: &NaiveDateTime) -> String {
    localized(published_at, "%-d %b %y")
}

/// Format a date for the page header (`sex, 8 janeiro`)
pub fn format_header_date(date: NaiveDate) -> String {
    match date.and_hms_opt(0, 0, 0) {
        Some(midnight) => localized(&midnight, "%a, %-d %B"),
        None => date.to_string(),
    }
}

fn localized(timestamp: &NaiveDateTime, layout: &str) -> String {
    let utc: DateTime<Utc> = Utc.from_utc_datetime(timestamp);
    utc.format_localized(layout, DISPLAY_LOCALE).to_string()
}
