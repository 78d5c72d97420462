//! Rating label parse errors.
//!
//! Scoring itself never fails: degenerate input (no answers, out-of-range
//! levels) maps to safe defaults instead of errors. The one fallible surface
//! is turning a stored label back into a [`Rating`](crate::model::Rating),
//! which matters when re-reading reports the web tier persisted as text.

use thiserror::Error;

/// Error returned when a string is not one of the four rating labels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown rating label: {0:?}")]
pub struct ParseRatingError(pub String);

impl ParseRatingError {
    /// The label that failed to parse.
    pub fn label(&self) -> &str {
        &self.0
    }
}
