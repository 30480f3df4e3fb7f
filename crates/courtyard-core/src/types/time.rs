//! HH:MM time-of-day parsing and formatting.
//!
//! Facility operating hours and booking slot boundaries travel over the
//! wire as `"HH:MM"` strings and are stored as SQL `TIME` values
//! (`chrono::NaiveTime`). All parsing funnels through [`parse_hhmm`] so
//! that malformed input consistently fails with
//! [`ErrorKind::InvalidTimeFormat`].

use chrono::NaiveTime;

use crate::error::AppError;
use crate::result::AppResult;

/// Parse a `"HH:MM"` string into a `NaiveTime`.
pub fn parse_hhmm(value: &str) -> AppResult<NaiveTime> {
    let (hour, minute) = value
        .split_once(':')
        .ok_or_else(|| invalid(value))?;

    let hour: u32 = hour.parse().map_err(|_| invalid(value))?;
    let minute: u32 = minute.parse().map_err(|_| invalid(value))?;

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| invalid(value))
}

/// Format a `NaiveTime` as `"HH:MM"` (seconds dropped).
pub fn format_hhmm(value: NaiveTime) -> String {
    value.format("%H:%M").to_string()
}

fn invalid(value: &str) -> AppError {
    AppError::invalid_time_format(format!("Invalid time '{value}', expected HH:MM"))
}

/// Serde adapter serializing a `NaiveTime` as `"HH:MM"`.
///
/// Used with `#[serde(with = "courtyard_core::types::time::hhmm")]`.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    /// Serialize as `"HH:MM"`.
    pub fn serialize<S: Serializer>(value: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_hhmm(*value))
    }

    /// Deserialize from `"HH:MM"`.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_hhmm(&raw).map_err(|e| D::Error::custom(e.message))
    }
}
