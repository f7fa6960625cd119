//! # meeting-grid-python
//!
//! Python bindings for meeting-grid, built with PyO3, so the server can run the
//! same placement and pre-check as the browser.
//!
//! Exposes the following functions as the `_native` module:
//!
//! - `map_to_grid(start, end, day)` -- `(row, column, span)` on the standard layout
//! - `check_conflict(candidate_json, existing_json, committed_json=None)` -- JSON check result
//! - `open_slots(day, duration_minutes, existing_json, layout_json=None)` -- JSON openings

use meeting_grid::{GridLayout, Meeting};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn value_err(e: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn parse_meeting(json: &str) -> PyResult<Meeting> {
    serde_json::from_str(json).map_err(|e| PyValueError::new_err(format!("Invalid meeting JSON: {}", e)))
}

fn parse_meetings(json: &str) -> PyResult<Vec<Meeting>> {
    serde_json::from_str(json)
        .map_err(|e| PyValueError::new_err(format!("Invalid meetings JSON: {}", e)))
}

/// Map a meeting to its grid cell on the standard layout.
///
/// Args:
///     start: Start time, "HH:MM" 24-hour.
///     end: End time, "HH:MM" 24-hour.
///     day: Day code ("MO" .. "SU").
///
/// Returns:
///     A `(row, column, span)` tuple.
///
/// Raises:
///     ValueError: If a time is malformed or the day code is unknown.
#[pyfunction]
fn map_to_grid(start: &str, end: &str, day: &str) -> PyResult<(u32, u32, u32)> {
    let pos = meeting_grid::map_to_grid_str(start, end, day).map_err(value_err)?;
    Ok((pos.row, pos.column, pos.span))
}

/// Pre-check a candidate meeting against the meetings already placed.
///
/// Args:
///     candidate_json: The candidate meeting as JSON
///         (`{day, startTime, endTime, room, building, label?}`).
///     existing_json: JSON array of placed meetings, in scan order.
///     committed_json: The candidate's last saved state, if any.
///
/// Returns:
///     A JSON string `{valid, reason, message, overlap_minutes?}`.
///
/// Raises:
///     ValueError: If any JSON input is malformed.
#[pyfunction]
#[pyo3(signature = (candidate_json, existing_json, committed_json=None))]
fn check_conflict(
    candidate_json: &str,
    existing_json: &str,
    committed_json: Option<&str>,
) -> PyResult<String> {
    let candidate = parse_meeting(candidate_json)?;
    let committed = committed_json.map(parse_meeting).transpose()?;
    let existing = parse_meetings(existing_json)?;

    let verdict = meeting_grid::check_conflict(&candidate, committed.as_ref(), &existing);
    serde_json::to_string(&verdict.to_result(&candidate))
        .map_err(|e| PyValueError::new_err(format!("Serialization error: {}", e)))
}

/// Canonical start times on `day` where a meeting of `duration_minutes` fits.
///
/// Args:
///     day: Day code ("MO" .. "SU").
///     duration_minutes: Meeting length in minutes.
///     existing_json: JSON array of placed meetings.
///     layout_json: Optional layout (`{"first_row": 2, "instants": [...]}`).
///
/// Returns:
///     A JSON array of `{day, start, end, position}` objects.
///
/// Raises:
///     ValueError: If the day, meetings or layout are malformed.
#[pyfunction]
#[pyo3(signature = (day, duration_minutes, existing_json, layout_json=None))]
fn open_slots(
    day: &str,
    duration_minutes: i64,
    existing_json: &str,
    layout_json: Option<&str>,
) -> PyResult<String> {
    let day: meeting_grid::Day = day.parse().map_err(value_err)?;
    let existing = parse_meetings(existing_json)?;
    let layout = match layout_json {
        Some(json) => GridLayout::from_json(json).map_err(value_err)?,
        None => GridLayout::standard(),
    };

    let openings = meeting_grid::open_slots(&layout, day, duration_minutes, &existing);
    serde_json::to_string(&openings)
        .map_err(|e| PyValueError::new_err(format!("Serialization error: {}", e)))
}

/// The native extension module.
#[pymodule]
fn _native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(map_to_grid, m)?)?;
    m.add_function(wrap_pyfunction!(check_conflict, m)?)?;
    m.add_function(wrap_pyfunction!(open_slots, m)?)?;
    Ok(())
}
