//! Position Mapper: `(start, end, day)` → weekly grid cell.
//!
//! The row is the canonical instant nearest to the start time, the column is fixed
//! per weekday, and the span is the duration in row-heights rounded half-up.
//! The mapper never checks `end > start`; a zero or reversed range maps to
//! `span = 0` and is rejected by the validator instead.

use std::sync::LazyLock;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clock::{parse_hhmm, seconds_from_midnight};
use crate::day::Day;
use crate::error::Result;
use crate::layout::GridLayout;

static STANDARD: LazyLock<GridLayout> = LazyLock::new(GridLayout::standard);

/// Where a meeting is drawn on the weekly grid (CSS grid row / column / row-span).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    pub row: u32,
    pub column: u32,
    pub span: u32,
}

impl GridLayout {
    /// Place a meeting on this layout.
    pub fn place(&self, start: NaiveTime, end: NaiveTime, day: Day) -> GridPosition {
        let start_secs = seconds_from_midnight(start);
        let duration = seconds_from_midnight(end) - start_secs;

        let position = GridPosition {
            row: self.nearest_row(start_secs),
            column: day.column(),
            span: span_for(duration, self.slot_seconds()),
        };
        debug!(%day, start = %start.format("%H:%M"), end = %end.format("%H:%M"), ?position, "placed meeting");
        position
    }
}

/// Number of rows covered by `duration` seconds, rounded half-up.
///
/// Non-positive durations cover no rows; any positive duration covers at least one.
fn span_for(duration: i64, slot_seconds: i64) -> u32 {
    if duration <= 0 {
        return 0;
    }
    let rounded = (2 * duration + slot_seconds) / (2 * slot_seconds);
    u32::try_from(rounded.max(1)).unwrap_or(u32::MAX)
}

/// Place a meeting on the standard layout.
pub fn map_to_grid(start: NaiveTime, end: NaiveTime, day: Day) -> GridPosition {
    STANDARD.place(start, end, day)
}

/// Place a meeting given its raw `HH:MM` times and two-letter day code.
///
/// # Errors
/// Returns `GridError::MalformedTime` or `GridError::UnknownDay` for bad input.
pub fn map_to_grid_str(start: &str, end: &str, day: &str) -> Result<GridPosition> {
    let start = parse_hhmm(start)?;
    let end = parse_hhmm(end)?;
    let day: Day = day.parse()?;
    Ok(map_to_grid(start, end, day))
}
