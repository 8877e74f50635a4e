//! Error types for cylens

use thiserror::Error;

/// Errors raised when a plan tree is structurally invalid.
///
/// A malformed plan aborts the single analysis request; it is never
/// recoverable by the core itself.
#[derive(Debug, Error)]
pub enum MalformedPlanError {
    #[error("Invalid plan JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Plan node at depth {depth} is not an object")]
    NotAnObject { depth: usize },

    #[error("Children of plan node at depth {depth} is not an array")]
    InvalidChildren { depth: usize },

    #[error("Plan tree contains a cyclic reference")]
    CyclicReference,
}

/// A collaborator could not supply a plan for a query.
///
/// Callers surface this as a degraded result where possible (for example a
/// comparison without its optimized side) rather than failing the whole
/// request.
#[derive(Debug, Clone, Error)]
#[error("Plan unavailable: {message}")]
pub struct PlanUnavailableError {
    /// Collaborator-supplied description of the failure
    pub message: String,
}

impl PlanUnavailableError {
    /// Creates a new error with the given message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
