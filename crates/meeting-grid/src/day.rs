//! Weekday codes and their grid columns.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// A day of the teaching week, using the two-letter codes of the course catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Day {
    #[serde(rename = "MO")]
    Mon,
    #[serde(rename = "TU")]
    Tue,
    #[serde(rename = "WE")]
    Wed,
    #[serde(rename = "TH")]
    Thu,
    #[serde(rename = "FR")]
    Fri,
    #[serde(rename = "SA")]
    Sat,
    #[serde(rename = "SU")]
    Sun,
}

impl Day {
    /// All days in week order, Monday first.
    pub const ALL: [Day; 7] = [Day::Mon, Day::Tue, Day::Wed, Day::Thu, Day::Fri, Day::Sat, Day::Sun];

    /// Grid column for this day. Columns 1 and 2 hold the time labels.
    pub fn column(self) -> u32 {
        match self {
            Day::Mon => 3,
            Day::Tue => 4,
            Day::Wed => 5,
            Day::Thu => 6,
            Day::Fri => 7,
            Day::Sat => 8,
            Day::Sun => 9,
        }
    }

    /// Two-letter catalog code, as used on the wire.
    pub fn code(self) -> &'static str {
        match self {
            Day::Mon => "MO",
            Day::Tue => "TU",
            Day::Wed => "WE",
            Day::Thu => "TH",
            Day::Fri => "FR",
            Day::Sat => "SA",
            Day::Sun => "SU",
        }
    }
}

impl FromStr for Day {
    type Err = GridError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        Day::ALL
            .into_iter()
            .find(|d| d.code() == code)
            .ok_or_else(|| GridError::UnknownDay(s.to_string()))
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_follow_week_order() {
        let columns: Vec<u32> = Day::ALL.iter().map(|d| d.column()).collect();
        assert_eq!(columns, vec![3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("tu".parse::<Day>().unwrap(), Day::Tue);
        assert_eq!(" SU ".parse::<Day>().unwrap(), Day::Sun);
    }

    #[test]
    fn unknown_code_is_an_error() {
        assert!(matches!("XX".parse::<Day>(), Err(GridError::UnknownDay(c)) if c == "XX"));
        assert!("Monday".parse::<Day>().is_err());
    }
}
