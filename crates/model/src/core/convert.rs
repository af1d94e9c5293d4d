//! Conversions used while turning request payloads into condition values:
//! JSON text and serializable structs into maps, and date-time strings in a
//! given time zone.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt::Write;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("value is not a JSON object")]
    NotAnObject,
}

/// Parses a JSON object into a field map.
pub fn json_to_map(text: &str) -> Result<Map<String, Value>, ConvertError> {
    match serde_json::from_str::<Value>(text)? {
        Value::Object(map) => Ok(map),
        _ => Err(ConvertError::NotAnObject),
    }
}

/// Serializes a struct into a field map. Nested structs become nested maps.
pub fn to_map<T: Serialize + ?Sized>(value: &T) -> Result<Map<String, Value>, ConvertError> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        _ => Err(ConvertError::NotAnObject),
    }
}

/// Parses `text` with a chrono `format` and localizes it in `tz`.
///
/// Date-only formats resolve to midnight. Unparsable text and local times
/// that are skipped or repeated by a DST transition yield `None`.
pub fn str_to_datetime(format: &str, text: &str, tz: Tz) -> Option<DateTime<Tz>> {
    let naive = NaiveDateTime::parse_from_str(text, format)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(text, format)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;

    tz.from_local_datetime(&naive).single()
}

/// Like [`str_to_datetime`], but empty input is treated as absent.
pub fn str_to_datetime_opt(format: &str, text: &str, tz: Tz) -> Option<DateTime<Tz>> {
    if text.is_empty() {
        return None;
    }
    str_to_datetime(format, text, tz)
}

/// Formats `datetime` with a chrono `format`. An absent value or a format
/// with an unsupported specifier yields an empty string.
pub fn datetime_to_str(format: &str, datetime: Option<&DateTime<Tz>>) -> String {
    let Some(dt) = datetime else {
        return String::new();
    };

    let mut out = String::new();
    match write!(out, "{}", dt.format(format)) {
        Ok(()) => out,
        Err(_) => String::new(),
    }
}
