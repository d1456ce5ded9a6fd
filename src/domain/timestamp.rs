use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use serde::{Serialize, Serializer};

/// A point in time, stored as a native document-store date-time
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// The current server time
    pub fn now() -> Self {
        Self(Utc::now())
    }
}

/// Offset-carrying forms beyond RFC 3339: basic `+hhmm` offsets, minute precision
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M%z"];

/// Offset-less forms, taken as UTC
const LOCAL_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

impl FromStr for Timestamp {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        let normalized = normalize(value);

        if let Ok(datetime) = DateTime::parse_from_rfc3339(&normalized) {
            return Ok(Self(datetime.with_timezone(&Utc)));
        }
        for format in OFFSET_FORMATS {
            if let Ok(datetime) = DateTime::parse_from_str(&normalized, format) {
                return Ok(Self(datetime.with_timezone(&Utc)));
            }
        }
        for format in LOCAL_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(&normalized, format) {
                return Ok(Self(Utc.from_utc_datetime(&naive)));
            }
        }
        // A bare date is midnight UTC
        NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| Self(Utc.from_utc_datetime(&naive)))
            .ok_or_else(|| format!("{} is not an ISO-8601 timestamp", value))
    }
}

/// Use `T` between date and time and spell a `Z` suffix as `+00:00`
fn normalize(value: &str) -> String {
    let mut normalized = value.to_string();

    if normalized.as_bytes().get(10) == Some(&b' ') {
        normalized.replace_range(10..11, "T");
    }
    if normalized.len() > 10 && normalized.ends_with(|c: char| c == 'Z' || c == 'z') {
        normalized.pop();
        normalized.push_str("+00:00");
    }
    normalized
}

impl AsRef<DateTime<Utc>> for Timestamp {
    fn as_ref(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        bson::DateTime::from_chrono(self.0).serialize(serializer)
    }
}
