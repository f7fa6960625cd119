//! The meeting record shared by the mapper, the validator and the open-slot search.

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::clock::{self, format_hhmm, seconds_from_midnight};
use crate::day::Day;

/// One weekly meeting of a section: a day, a time range and a room.
///
/// `room` and `building` are opaque identifiers; a room number is only meaningful
/// within its building, and an empty `room` means no room is assigned yet. `label`
/// is display text only (instructor or section name) and never takes part in
/// comparisons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub day: Day,
    #[serde(with = "clock::hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "clock::hhmm")]
    pub end_time: NaiveTime,
    pub room: String,
    pub building: String,
    #[serde(default)]
    pub label: String,
}

impl Meeting {
    /// Unlabelled meeting in `room` of `building`.
    pub fn new(
        day: Day,
        start_time: NaiveTime,
        end_time: NaiveTime,
        room: impl Into<String>,
        building: impl Into<String>,
    ) -> Self {
        Self {
            day,
            start_time,
            end_time,
            room: room.into(),
            building: building.into(),
            label: String::new(),
        }
    }

    /// Attach display text shown in messages instead of the day and times.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Start as seconds since midnight.
    pub fn start_seconds(&self) -> i64 {
        seconds_from_midnight(self.start_time)
    }

    /// End as seconds since midnight.
    pub fn end_seconds(&self) -> i64 {
        seconds_from_midnight(self.end_time)
    }

    /// `end > start`, strictly.
    pub fn has_valid_range(&self) -> bool {
        self.end_seconds() > self.start_seconds()
    }

    /// Same day, times, room and building. The label is ignored.
    pub fn same_slot(&self, other: &Meeting) -> bool {
        self.day == other.day
            && self.start_time == other.start_time
            && self.end_time == other.end_time
            && self.room == other.room
            && self.building == other.building
    }

    /// Same assigned room in the same building. Unassigned rooms never match.
    pub fn same_room(&self, other: &Meeting) -> bool {
        !self.room.is_empty() && self.room == other.room && self.building == other.building
    }

    /// Same day and intersecting time ranges.
    ///
    /// Boundaries are inclusive: a meeting ending at 10:00 overlaps one starting at 10:00.
    pub fn overlaps(&self, other: &Meeting) -> bool {
        self.day == other.day
            && self.start_seconds() <= other.end_seconds()
            && self.end_seconds() >= other.start_seconds()
    }

    /// Minutes shared with `other`, ignoring the day. Zero when the ranges only touch.
    pub fn overlap_minutes(&self, other: &Meeting) -> i64 {
        let start = self.start_seconds().max(other.start_seconds());
        let end = self.end_seconds().min(other.end_seconds());
        ((end - start) / 60).max(0)
    }
}

impl fmt::Display for Meeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.label.is_empty() {
            return f.write_str(&self.label);
        }
        write!(
            f,
            "{} {}-{}",
            self.day,
            format_hhmm(self.start_time),
            format_hhmm(self.end_time)
        )
    }
}
