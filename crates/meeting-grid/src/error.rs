//! Error types for meeting-grid operations.
//!
//! Only malformed input is an error. Scheduling conflicts and invalid time
//! ranges are ordinary outcomes, see [`crate::validator::Verdict`].

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("Malformed time '{0}': expected HH:MM")]
    MalformedTime(String),

    #[error("Unknown day code '{0}': expected one of MO, TU, WE, TH, FR, SA, SU")]
    UnknownDay(String),

    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    #[error("Layout JSON error: {0}")]
    LayoutJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GridError>;
