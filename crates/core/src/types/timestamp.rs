//! ISO-8601 timestamp formatting.
//!
//! All timestamps on the wire are UTC with millisecond precision and a `Z`
//! suffix, e.g. `2026-10-15T12:00:00.000Z`.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a timestamp as ISO-8601 with milliseconds.
#[must_use]
pub fn to_iso_millis(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serde adapter for `#[serde(with = "iso_millis")]`.
///
/// Serializes with [`to_iso_millis`] and accepts any RFC 3339 timestamp when
/// deserializing.
pub mod iso_millis {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize a timestamp as ISO-8601 with milliseconds.
    ///
    /// # Errors
    ///
    /// Returns the serializer's error if writing the string fails.
    pub fn serialize<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::to_iso_millis(at))
    }

    /// Deserialize an RFC 3339 timestamp into UTC.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a valid RFC 3339 string.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
