//! `HH:MM` serialization for wall-clock times

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serializer};

const CLOCK_FORMAT: &str = "%H:%M";

pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&time.format(CLOCK_FORMAT).to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(serde::de::Error::custom)
}

/// Parse `HH:MM`, tolerating a trailing `:SS`
pub fn parse(raw: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(raw, CLOCK_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map_err(|_| format!("invalid clock time '{}', expected HH:MM", raw))
}

/// Clock time from hours and minutes, saturating to midnight on bad input
pub fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

/// Format a clock time the way it is serialized
pub fn format(time: NaiveTime) -> String {
    time.format(CLOCK_FORMAT).to_string()
}
