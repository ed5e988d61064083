//! Input validation for scheduling simulations.
//!
//! Checks structural integrity of a task set before it is scheduled.
//! Detects:
//! - Duplicate process IDs
//! - Process IDs outside `0..N`
//! - Remaining run time larger than the total execution time
//! - Total execution time past the range of the simulation clock
//! - Mismatched parallel input arrays

use std::collections::HashSet;

use crate::error::ScheduleError;
use crate::models::Task;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two tasks share the same process ID.
    DuplicateId,
    /// A process ID does not index the original input.
    InvalidProcessId,
    /// `left_to_execute` exceeds `execution_time`.
    InconsistentRemaining,
    /// The execution times sum past `u64::MAX`.
    TotalTimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a task set.
///
/// Checks:
/// 1. No duplicate process IDs
/// 2. Every process ID lies in `0..tasks.len()`
/// 3. No task owes more run time than it requires in total
/// 4. The summed execution times fit the `u64` clock
///
/// Together, 1 and 2 mean the IDs form exactly `{0..N-1}`.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_tasks(tasks: &[Task]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    let mut total: Option<u64> = Some(0);

    for task in tasks {
        if !seen.insert(task.process_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", task.process_id),
            ));
        }

        if task.process_id >= tasks.len() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidProcessId,
                format!(
                    "Process ID {} out of range for {} tasks",
                    task.process_id,
                    tasks.len()
                ),
            ));
        }

        if task.left_to_execute > task.execution_time {
            errors.push(ValidationError::new(
                ValidationErrorKind::InconsistentRemaining,
                format!(
                    "Task {} has {} left to execute but only {} in total",
                    task.process_id, task.left_to_execute, task.execution_time
                ),
            ));
        }

        total = total.and_then(|t| t.checked_add(task.execution_time));
    }

    // Bounds the clock of either scheduler: every dispatch advances it by
    // at most the dispatched task's remaining time.
    if total.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TotalTimeOverflow,
            "Total execution time exceeds u64::MAX",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates parallel input arrays before task records are built from them.
pub fn validate_workload(
    execution_times: &[u64],
    priorities: Option<&[i64]>,
) -> Result<(), ScheduleError> {
    match priorities {
        Some(p) if p.len() != execution_times.len() => Err(ScheduleError::LengthMismatch {
            execution_times: execution_times.len(),
            priorities: p.len(),
        }),
        _ => Ok(()),
    }
}
