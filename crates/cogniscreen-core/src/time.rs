//! Timestamp serialization conventions.
//!
//! Timestamps are serialized as fixed-width ISO-8601 UTC strings with
//! millisecond precision (`2026-01-02T03:04:05.006Z`). The fixed width makes
//! lexicographic comparison agree with chronological order, so the document
//! store can run `$gt` filters and descending sorts directly on the stored
//! strings.

use jiff::Timestamp;
use jiff::tz::TimeZone;

/// Format a timestamp as a fixed-width ISO-8601 UTC string.
pub fn to_fixed(ts: Timestamp) -> String {
    let z = ts.to_zoned(TimeZone::UTC);
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
        z.year(),
        z.month(),
        z.day(),
        z.hour(),
        z.minute(),
        z.second(),
        ts.subsec_millisecond().abs(),
    )
}

/// Serde adapter for `jiff::Timestamp` fields using the fixed-width format.
pub mod timestamp {
    use jiff::Timestamp;
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::to_fixed(*ts))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TimestampVisitor;

        impl Visitor<'_> for TimestampVisitor {
            type Value = Timestamp;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("an ISO-8601 timestamp string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Timestamp, E>
            where
                E: de::Error,
            {
                v.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(TimestampVisitor)
    }
}
