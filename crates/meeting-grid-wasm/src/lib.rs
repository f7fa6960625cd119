//! WASM bindings for meeting-grid.
//!
//! Exposes grid placement, the overlap pre-check and open-slot search to the
//! browser editing screens via `wasm-bindgen`. Every screen calls these instead of
//! carrying its own copy of the snapping table and overlap test. Complex values
//! cross the boundary as JSON strings, matching the `Meeting` serde shape
//! (`{day, startTime, endTime, room, building, label?}`).
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p meeting-grid-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir static/javascript/wasm/ \
//!   target/wasm32-unknown-unknown/release/meeting_grid_wasm.wasm
//! ```

use meeting_grid::{GridLayout, Meeting};
use wasm_bindgen::prelude::*;

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn parse_meeting(json: &str) -> Result<Meeting, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("Invalid meeting JSON: {}", e)))
}

fn parse_meetings(json: &str) -> Result<Vec<Meeting>, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("Invalid meetings JSON: {}", e)))
}

fn parse_layout(json: Option<String>) -> Result<GridLayout, JsValue> {
    match json {
        Some(json) => GridLayout::from_json(&json).map_err(js_err),
        None => Ok(GridLayout::standard()),
    }
}

/// Map a meeting to its grid cell on the standard layout.
///
/// Returns a JSON string `{row, column, span}`. Throws on a malformed `HH:MM`
/// time or an unknown day code.
#[wasm_bindgen(js_name = "mapToGrid")]
pub fn map_to_grid(start: &str, end: &str, day: &str) -> Result<String, JsValue> {
    let position = meeting_grid::map_to_grid_str(start, end, day).map_err(js_err)?;
    to_json(&position)
}

/// Map a meeting to its grid cell on a layout given as JSON
/// (`{"first_row": 2, "instants": ["08:00", ...]}`).
#[wasm_bindgen(js_name = "mapToGridWithLayout")]
pub fn map_to_grid_with_layout(
    layout_json: &str,
    start: &str,
    end: &str,
    day: &str,
) -> Result<String, JsValue> {
    let layout = GridLayout::from_json(layout_json).map_err(js_err)?;
    let start = meeting_grid::clock::parse_hhmm(start).map_err(js_err)?;
    let end = meeting_grid::clock::parse_hhmm(end).map_err(js_err)?;
    let day: meeting_grid::Day = day.parse().map_err(js_err)?;
    to_json(&layout.place(start, end, day))
}

/// Pre-check a candidate meeting against the meetings already placed.
///
/// `committed_json` is the candidate's last saved state, or `undefined` for a new
/// meeting. Returns a JSON `{valid, reason, message, overlap_minutes?}` object.
#[wasm_bindgen(js_name = "checkConflict")]
pub fn check_conflict(
    candidate_json: &str,
    committed_json: Option<String>,
    existing_json: &str,
) -> Result<String, JsValue> {
    let candidate = parse_meeting(candidate_json)?;
    let committed = committed_json.as_deref().map(parse_meeting).transpose()?;
    let existing = parse_meetings(existing_json)?;

    let verdict = meeting_grid::check_conflict(&candidate, committed.as_ref(), &existing);
    to_json(&verdict.to_result(&candidate))
}

/// Canonical start times on `day` where a meeting of `duration_minutes` fits.
///
/// Returns a JSON array of `{day, start, end, position}` objects.
#[wasm_bindgen(js_name = "openSlots")]
pub fn open_slots(
    day: &str,
    duration_minutes: i32,
    existing_json: &str,
    layout_json: Option<String>,
) -> Result<String, JsValue> {
    let day: meeting_grid::Day = day.parse().map_err(js_err)?;
    let existing = parse_meetings(existing_json)?;
    let layout = parse_layout(layout_json)?;

    let openings = meeting_grid::open_slots(&layout, day, i64::from(duration_minutes), &existing);
    to_json(&openings)
}
