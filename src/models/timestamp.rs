//! Timestamp parsing for server records.
//!
//! The server emits naive ISO-8601 datetimes in UTC
//! (`2024-05-01T09:30:00` or with fractional seconds). RFC 3339 strings with
//! an explicit offset are accepted too and normalized to UTC.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a server timestamp.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Deserialize a required timestamp.
pub fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", raw)))
}

/// Deserialize an optional timestamp. `null` and a missing field are `None`.
pub fn deserialize_optional_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => parse_timestamp(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", raw))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_naive_as_utc() {
        let parsed = parse_timestamp("2024-05-01T09:30:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_naive_fractional() {
        let parsed = parse_timestamp("2024-05-01T09:30:00.123456").unwrap();
        assert_eq!(parsed.timestamp(), Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap().timestamp());
    }

    #[test]
    fn test_parse_rfc3339_offset_normalized() {
        let parsed = parse_timestamp("2024-05-01T11:30:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
        at: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_optional_null_and_missing() {
        let null: Probe = serde_json::from_str(r#"{"at": null}"#).unwrap();
        assert!(null.at.is_none());
        let missing: Probe = serde_json::from_str(r#"{}"#).unwrap();
        assert!(missing.at.is_none());
        let set: Probe = serde_json::from_str(r#"{"at": "2024-01-02T03:04:05"}"#).unwrap();
        assert!(set.at.is_some());
    }
}
