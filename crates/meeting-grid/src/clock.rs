//! Wall-clock time-of-day helpers.
//!
//! Meeting times are plain times of day with no date or timezone attached.
//! They are carried as `chrono::NaiveTime` and compared as seconds since midnight.

use chrono::{NaiveTime, Timelike};

use crate::error::{GridError, Result};

/// Parse a 24-hour `HH:MM` string (a one-digit hour is accepted).
///
/// # Errors
/// Returns `GridError::MalformedTime` for anything else, including seconds,
/// AM/PM suffixes and out-of-range hours or minutes.
pub fn parse_hhmm(input: &str) -> Result<NaiveTime> {
    let malformed = || GridError::MalformedTime(input.to_string());
    let trimmed = input.trim();

    let (hours, minutes) = trimmed.split_once(':').ok_or_else(malformed)?;
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !digits(hours) || hours.len() > 2 || !digits(minutes) || minutes.len() != 2 {
        return Err(malformed());
    }

    let h: u32 = hours.parse().map_err(|_| malformed())?;
    let m: u32 = minutes.parse().map_err(|_| malformed())?;
    NaiveTime::from_hms_opt(h, m, 0).ok_or_else(malformed)
}

/// Seconds elapsed since midnight.
pub fn seconds_from_midnight(time: NaiveTime) -> i64 {
    i64::from(time.num_seconds_from_midnight())
}

/// Format as zero-padded `HH:MM`.
pub fn format_hhmm(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Serde adapter storing a `NaiveTime` as `"HH:MM"`.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_hhmm(*time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_hhmm(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_padded_and_unpadded_hours() {
        assert_eq!(parse_hhmm("09:05").unwrap(), NaiveTime::from_hms_opt(9, 5, 0).unwrap());
        assert_eq!(parse_hhmm("9:05").unwrap(), NaiveTime::from_hms_opt(9, 5, 0).unwrap());
        assert_eq!(parse_hhmm(" 23:59 ").unwrap(), NaiveTime::from_hms_opt(23, 59, 0).unwrap());
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in ["", "0900", "9:5", "24:00", "12:60", "12:00:00", "ab:cd", "+1:00", "1:00 PM"] {
            assert!(
                matches!(parse_hhmm(bad), Err(GridError::MalformedTime(_))),
                "expected MalformedTime for {bad:?}"
            );
        }
    }

    #[test]
    fn seconds_and_format() {
        let t = parse_hhmm("13:30").unwrap();
        assert_eq!(seconds_from_midnight(t), 13 * 3600 + 30 * 60);
        assert_eq!(format_hhmm(t), "13:30");
    }
}
