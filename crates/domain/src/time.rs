//! Timestamp formatting
//!
//! All timestamps on the wire are RFC 3339 UTC with millisecond precision,
//! e.g. `2025-01-15T12:00:00.000Z`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

/// Format a timestamp as an ISO-8601 string with milliseconds and a `Z` suffix
#[must_use]
pub fn iso_millis(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serde helper for `#[serde(serialize_with = "...")]`
pub fn serialize_iso_millis<S>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&iso_millis(*at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_with_millis_and_zulu() {
        let at = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        assert_eq!(iso_millis(at), "2025-01-15T12:00:00.000Z");
    }
}
