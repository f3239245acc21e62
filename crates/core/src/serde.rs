//! Serde helper functions for event payloads.
//!
//! The remote API is loose about identifiers and instants: ids arrive as
//! strings or numbers, and instants may be missing, empty, or malformed.
//! A single bad instant must not reject the whole payload, so instants
//! deserialize leniently to `None` and the layout engine reports them.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Wall-clock formats accepted in addition to RFC 3339.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses an instant into local wall-clock time.
///
/// RFC 3339 values keep the wall-clock part as written (no conversion to
/// another zone). A bare date means midnight.
///
/// # Examples
///
/// ```
/// use dashcal_core::serde::parse_instant;
///
/// let t = parse_instant("2024-01-15T09:30:00+02:00").unwrap();
/// assert_eq!(t.to_string(), "2024-01-15 09:30:00");
///
/// assert!(parse_instant("2024-01-15").is_some());
/// assert!(parse_instant("next tuesday").is_none());
/// ```
pub fn parse_instant(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Instant as the API may send it.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawInstant {
    Text(String),
    /// Milliseconds since the Unix epoch, read as UTC wall-clock time.
    Millis(i64),
    Other(IgnoredAny),
}

impl RawInstant {
    fn into_instant(self) -> Option<NaiveDateTime> {
        match self {
            RawInstant::Text(s) => {
                let parsed = parse_instant(&s);
                if parsed.is_none() && !s.trim().is_empty() {
                    tracing::warn!(value = %s, "Ignoring unparseable instant");
                }
                parsed
            }
            RawInstant::Millis(ms) => {
                let parsed = DateTime::from_timestamp_millis(ms).map(|dt| dt.naive_utc());
                if parsed.is_none() {
                    tracing::warn!(value = ms, "Ignoring out of range epoch instant");
                }
                parsed
            }
            RawInstant::Other(_) => {
                tracing::warn!("Ignoring instant that is neither a string nor an integer");
                None
            }
        }
    }
}

/// Deserialize an optional instant, mapping empty or unparseable values to None.
///
/// Strings go through [`parse_instant`], integers are epoch milliseconds,
/// and any other JSON value is dropped instead of failing the event.
pub fn deserialize_lenient_instant<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawInstant> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(RawInstant::into_instant))
}

/// Identifier as the API may send it.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        }
    }
}

/// Deserialize an identifier given either as a string or an integer.
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(String::from)
}

/// Deserialize an optional identifier, treating empty strings as None.
pub fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawId> = Option::deserialize(deserializer)?;
    Ok(raw.map(String::from).filter(|s| !s.trim().is_empty()))
}

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}
