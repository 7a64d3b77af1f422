//! Backend timestamp parsing.
//!
//! The backend sends local timestamps without an offset (`2025-06-01T00:00:00`) for
//! some fields and UTC timestamps (`2025-06-01T00:00:00Z`) for others. Both are read into
//! `NaiveDateTime`; offset timestamps are converted to UTC first.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{de, Deserialize, Deserializer};

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;

    parse(&raw).map_err(|e| de::Error::custom(format!("invalid timestamp '{}': {}", raw, e)))
}

fn parse(raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    raw.parse::<NaiveDateTime>().or_else(|_| {
        DateTime::<FixedOffset>::parse_from_rfc3339(raw).map(|datetime| datetime.naive_utc())
    })
}
