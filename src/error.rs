//! Error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised while preparing or running a simulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// Parallel input arrays disagree in length.
    #[error("{execution_times} execution times but {priorities} priorities")]
    LengthMismatch {
        execution_times: usize,
        priorities: usize,
    },

    /// A time quantum of zero would never advance the clock.
    #[error("time quantum must be at least 1, got {0}")]
    InvalidQuantum(u64),

    /// Unknown policy name.
    #[error("invalid policy '{0}'. Valid: sjf, priority")]
    InvalidPolicy(String),

    /// The task set failed integrity checks.
    #[error("invalid task set: {}", format_errors(.0))]
    InvalidTaskSet(Vec<ValidationError>),
}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidTaskSet(errors)
    }
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
