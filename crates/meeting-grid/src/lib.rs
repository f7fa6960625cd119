//! # meeting-grid
//!
//! Deterministic placement of course meetings on a weekly calendar grid, plus the
//! client-side overlap pre-check run before a meeting edit is sent to the server.
//!
//! Every editing screen places and checks meetings through this one crate, so the
//! snapping table, rounding rule and overlap test are identical everywhere.
//!
//! ## Quick start
//!
//! ```rust
//! use meeting_grid::map_to_grid_str;
//!
//! let pos = map_to_grid_str("09:00", "10:15", "TU").unwrap();
//! assert_eq!((pos.row, pos.column, pos.span), (3, 4, 1));
//! ```
//!
//! ## Modules
//!
//! - [`clock`] — `HH:MM` parsing and seconds-since-midnight arithmetic
//! - [`day`] — Weekday codes and their grid columns
//! - [`meeting`] — The `Meeting` record and its interval helpers
//! - [`layout`] — Canonical class-start table (configurable via JSON)
//! - [`mapper`] — `(start, end, day)` → grid row/column/span
//! - [`validator`] — First-match overlap check for a candidate meeting
//! - [`openings`] — Canonical start slots that are still free on a day
//! - [`error`] — Error types

pub mod clock;
pub mod day;
pub mod error;
pub mod layout;
pub mod mapper;
pub mod meeting;
pub mod openings;
pub mod validator;

pub use day::Day;
pub use error::GridError;
pub use layout::GridLayout;
pub use mapper::{map_to_grid, map_to_grid_str, GridPosition};
pub use meeting::Meeting;
pub use openings::{open_slots, Opening};
pub use validator::{check_all, check_conflict, CheckResult, Conflict, Verdict};
