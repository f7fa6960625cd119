//! Local Overlap Validator: a fast pre-flight check before an edit reaches the server.
//!
//! The server stays authoritative. This check exists so the editing screen can tell
//! the user about an obvious clash without a round trip.
//!
//! `existing` is expected to hold one instructor's (or one section's) meetings, so
//! any same-day overlap is a personal schedule conflict even in another room.
//! Only the first conflict in scan order is reported.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::meeting::Meeting;

/// A same-day overlap between the candidate and an already-placed meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    pub existing: Meeting,
    /// Zero when the two meetings only share a boundary.
    pub overlap_minutes: i64,
}

/// Outcome of [`check_conflict`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Verdict {
    /// The candidate is identical to its committed state.
    NoOp,
    /// No conflict found.
    New,
    /// `end <= start`.
    InvalidTimeRange,
    /// Overlaps a meeting in the same room of the same building.
    RoomConflict(Conflict),
    /// Overlaps a meeting elsewhere (or with no room assigned) in the same schedule.
    ScheduleConflict(Conflict),
}

/// Flat form of a [`Verdict`] for callers that only show a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub valid: bool,
    pub reason: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlap_minutes: Option<i64>,
}

impl Verdict {
    /// Whether the edit may be submitted.
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::NoOp | Verdict::New)
    }

    /// Stable reason code.
    pub fn reason(&self) -> &'static str {
        match self {
            Verdict::NoOp => "no-op",
            Verdict::New => "new",
            Verdict::InvalidTimeRange => "invalid time range",
            Verdict::RoomConflict(_) => "room conflict",
            Verdict::ScheduleConflict(_) => "schedule conflict",
        }
    }

    /// The reported overlap, for either conflict kind.
    pub fn conflict(&self) -> Option<&Conflict> {
        match self {
            Verdict::RoomConflict(c) | Verdict::ScheduleConflict(c) => Some(c),
            _ => None,
        }
    }

    /// User-facing message for `candidate`.
    pub fn message(&self, candidate: &Meeting) -> String {
        match self {
            Verdict::NoOp => format!("Meeting {candidate} is unchanged."),
            Verdict::New => format!("Meeting {candidate} fits the schedule."),
            Verdict::InvalidTimeRange => "The end time must be after the start time.".to_string(),
            Verdict::RoomConflict(c) => format!(
                "Meeting {candidate} conflicts with {} in room {} {}.",
                c.existing, c.existing.building, c.existing.room
            ),
            Verdict::ScheduleConflict(c) => {
                format!("Meeting {candidate} interferes with your meeting {}.", c.existing)
            }
        }
    }

    /// Flatten into a [`CheckResult`] for `candidate`.
    pub fn to_result(&self, candidate: &Meeting) -> CheckResult {
        CheckResult {
            valid: self.is_valid(),
            reason: self.reason().to_string(),
            message: self.message(candidate),
            overlap_minutes: self.conflict().map(|c| c.overlap_minutes),
        }
    }
}

/// Check `candidate` against the meetings already placed.
///
/// `committed` is the candidate's own last saved state, if it has one. An unchanged
/// resubmission is a no-op, and the first entry of `existing` matching `committed`
/// is treated as the candidate's old self and skipped.
pub fn check_conflict(
    candidate: &Meeting,
    committed: Option<&Meeting>,
    existing: &[Meeting],
) -> Verdict {
    if !candidate.has_valid_range() {
        debug!(%candidate, "rejected: end is not after start");
        return Verdict::InvalidTimeRange;
    }

    if committed.is_some_and(|prev| candidate.same_slot(prev)) {
        return Verdict::NoOp;
    }

    let mut own_record_skipped = false;
    for other in existing {
        if !own_record_skipped && committed.is_some_and(|prev| other.same_slot(prev)) {
            own_record_skipped = true;
            continue;
        }
        if !candidate.overlaps(other) {
            continue;
        }

        let conflict = Conflict {
            existing: other.clone(),
            overlap_minutes: candidate.overlap_minutes(other),
        };
        debug!(%candidate, existing = %other, overlap_minutes = conflict.overlap_minutes, "conflict found");
        return if candidate.same_room(other) {
            Verdict::RoomConflict(conflict)
        } else {
            Verdict::ScheduleConflict(conflict)
        };
    }

    Verdict::New
}

/// Every same-day overlap between `candidate` and `existing`, in scan order.
///
/// Diagnostic listing only; validation decisions use [`check_conflict`].
pub fn check_all(candidate: &Meeting, existing: &[Meeting]) -> Vec<Conflict> {
    existing
        .iter()
        .filter(|other| candidate.overlaps(other))
        .map(|other| Conflict {
            existing: other.clone(),
            overlap_minutes: candidate.overlap_minutes(other),
        })
        .collect()
}
