//! Solver error type.
//!
//! There is exactly one failure mode: malformed input, rejected before any
//! relaxation runs. Everything after validation is total.

use thiserror::Error;

/// Input rejected before solving: non-positive vertex count, or a source /
/// edge endpoint outside `[0, vertex_count)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid input: {reason}")]
pub struct InvalidInput {
    reason: String,
}

impl InvalidInput {
    pub(crate) fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}
