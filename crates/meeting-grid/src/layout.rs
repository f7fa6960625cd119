//! Canonical class-start table used to snap meetings onto grid rows.
//!
//! A layout is an ascending list of "typical class start" instants. Row `first_row`
//! belongs to the first instant, the next row to the second, and so on. One grid
//! row is as tall as the smallest gap between two consecutive instants.
//!
//! The built-in table is [`GridLayout::standard`]; deployments with a different
//! bell schedule load their own from JSON:
//!
//! ```json
//! { "first_row": 2, "instants": ["08:00", "09:15", "10:30"] }
//! ```

use chrono::NaiveTime;
use serde::Deserialize;
use tracing::trace;

use crate::clock::{parse_hhmm, seconds_from_midnight};
use crate::error::{GridError, Result};

/// Row of the first instant in the standard layout. Row 1 is the day header.
pub const DEFAULT_FIRST_ROW: u32 = 2;

const STANDARD_INSTANTS: [(u32, u32); 11] = [
    (8, 0),
    (9, 0),
    (10, 0),
    (11, 0),
    (12, 0),
    (13, 0),
    (14, 0),
    (15, 0),
    (16, 0),
    (17, 0),
    (18, 0),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    first_row: u32,
    instants: Vec<NaiveTime>,
    slot_seconds: i64,
}

#[derive(Deserialize)]
struct LayoutConfig {
    #[serde(default = "default_first_row")]
    first_row: u32,
    instants: Vec<String>,
}

fn default_first_row() -> u32 {
    DEFAULT_FIRST_ROW
}

impl GridLayout {
    /// Build a layout from ascending instants.
    ///
    /// # Errors
    /// Returns `GridError::InvalidLayout` when fewer than two instants are given,
    /// when they are not strictly ascending, or when the last row number would not
    /// fit in a `u32`.
    pub fn new(first_row: u32, instants: Vec<NaiveTime>) -> Result<Self> {
        if instants.len() < 2 {
            return Err(GridError::InvalidLayout(format!(
                "need at least two instants, got {}",
                instants.len()
            )));
        }

        let last_row = u32::try_from(instants.len() - 1)
            .ok()
            .and_then(|extra| first_row.checked_add(extra));
        if last_row.is_none() {
            return Err(GridError::InvalidLayout(format!(
                "first_row {} leaves no room for {} rows",
                first_row,
                instants.len()
            )));
        }

        let mut slot_seconds = i64::MAX;
        for pair in instants.windows(2) {
            let gap = seconds_from_midnight(pair[1]) - seconds_from_midnight(pair[0]);
            if gap <= 0 {
                return Err(GridError::InvalidLayout(format!(
                    "instants must be strictly ascending ({} is not after {})",
                    pair[1].format("%H:%M"),
                    pair[0].format("%H:%M")
                )));
            }
            slot_seconds = slot_seconds.min(gap);
        }

        Ok(Self {
            first_row,
            instants,
            slot_seconds,
        })
    }

    /// Eleven hourly instants, 08:00 through 18:00, on rows 2 to 12.
    pub fn standard() -> Self {
        let instants = STANDARD_INSTANTS
            .iter()
            .filter_map(|&(h, m)| NaiveTime::from_hms_opt(h, m, 0))
            .collect();
        Self {
            first_row: DEFAULT_FIRST_ROW,
            instants,
            slot_seconds: 3600,
        }
    }

    /// Load a layout from its JSON configuration.
    ///
    /// # Errors
    /// `GridError::LayoutJson` for unparseable JSON, `GridError::MalformedTime` for a
    /// bad instant, and `GridError::InvalidLayout` for an unusable table.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LayoutConfig = serde_json::from_str(json)?;
        let instants = config
            .instants
            .iter()
            .map(|s| parse_hhmm(s))
            .collect::<Result<Vec<_>>>()?;
        Self::new(config.first_row, instants)
    }

    /// Row of the earliest instant.
    pub fn first_row(&self) -> u32 {
        self.first_row
    }

    /// Row of the latest instant.
    pub fn last_row(&self) -> u32 {
        self.first_row + (self.instants.len() - 1) as u32
    }

    /// Canonical instants, ascending.
    pub fn instants(&self) -> &[NaiveTime] {
        &self.instants
    }

    /// Time width of one grid row.
    pub fn slot_seconds(&self) -> i64 {
        self.slot_seconds
    }

    /// `(row, instant)` pairs from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = (u32, NaiveTime)> + '_ {
        (self.first_row..=self.last_row()).zip(self.instants.iter().copied())
    }

    /// Row of the instant closest to `seconds` since midnight.
    ///
    /// Linear scan; on a tie the earlier instant wins.
    pub fn nearest_row(&self, seconds: i64) -> u32 {
        let row = self
            .rows()
            .min_by_key(|(_, instant)| (seconds_from_midnight(*instant) - seconds).abs())
            .map(|(row, _)| row)
            .unwrap_or(self.first_row);
        trace!(seconds, row, "snapped start to canonical instant");
        row
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::standard()
    }
}
