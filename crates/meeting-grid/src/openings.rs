//! Open start slots for a meeting of a given length.
//!
//! Tries each canonical instant of a layout as a start time on one day and keeps
//! the ones whose `[start, start + duration]` range overlaps none of the meetings
//! already placed. Uses the same inclusive overlap rule as the validator, so every
//! suggestion passes [`crate::check_conflict`] against the same meetings.

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clock;
use crate::day::Day;
use crate::layout::GridLayout;
use crate::mapper::GridPosition;
use crate::meeting::Meeting;

/// A free start slot and where it would be drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opening {
    pub day: Day,
    #[serde(with = "clock::hhmm")]
    pub start: NaiveTime,
    #[serde(with = "clock::hhmm")]
    pub end: NaiveTime,
    pub position: GridPosition,
}

/// Canonical starts on `day` where a meeting of `duration_minutes` fits.
///
/// Slots that would run past midnight are skipped. A non-positive duration has
/// no openings. Results follow the layout's row order.
pub fn open_slots(
    layout: &GridLayout,
    day: Day,
    duration_minutes: i64,
    existing: &[Meeting],
) -> Vec<Opening> {
    let Some(duration) = Duration::try_minutes(duration_minutes).filter(|_| duration_minutes > 0)
    else {
        return Vec::new();
    };

    let openings: Vec<Opening> = layout
        .instants()
        .iter()
        .filter_map(|&start| {
            let (end, wrapped) = start.overflowing_add_signed(duration);
            if wrapped != 0 {
                return None;
            }
            let probe = Meeting::new(day, start, end, "", "");
            if existing.iter().any(|m| probe.overlaps(m)) {
                return None;
            }
            Some(Opening {
                day,
                start,
                end,
                position: layout.place(start, end, day),
            })
        })
        .collect();

    debug!(%day, duration_minutes, found = openings.len(), "searched open slots");
    openings
}
