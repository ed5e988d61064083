//! Task (process) record.
//!
//! A task represents one CPU burst to be scheduled: an identity, a total
//! execution cost, the remaining cost, and the timing results computed
//! by the scheduler.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::validation::validate_workload;

/// A task (process) to be scheduled.
///
/// # Time Representation
/// All times are in abstract time units relative to the start of the
/// simulation (t=0). Every task is ready at t=0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Index of this task in the caller's original input order.
    pub process_id: usize,
    /// Total run length required.
    pub execution_time: u64,
    /// Run length still owed (preemptive scheduling only).
    pub left_to_execute: u64,
    /// Time spent in the ready queue before the latest run.
    pub waiting_time: u64,
    /// Completion time once the task has finished.
    pub turnaround_time: u64,
    /// Scheduling priority (higher = scheduled first).
    pub priority: i64,
}

impl Task {
    /// Creates a fresh task with no timing results.
    pub fn new(process_id: usize, execution_time: u64) -> Self {
        Self {
            process_id,
            execution_time,
            left_to_execute: execution_time,
            waiting_time: 0,
            turnaround_time: 0,
            priority: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Whether no run time is owed any more.
    pub fn is_finished(&self) -> bool {
        self.left_to_execute == 0
    }

    /// Run time already received.
    pub fn executed_time(&self) -> u64 {
        self.execution_time.saturating_sub(self.left_to_execute)
    }
}

/// Builds the task set for shortest-job-first scheduling.
///
/// `process_id` is the index into `execution_times`.
pub fn init_sjf(execution_times: &[u64]) -> Vec<Task> {
    execution_times
        .iter()
        .enumerate()
        .map(|(pid, &exec)| Task::new(pid, exec))
        .collect()
}

/// Builds the task set for priority scheduling.
///
/// # Errors
/// [`ScheduleError::LengthMismatch`] if the two slices differ in length.
pub fn init_priority(
    execution_times: &[u64],
    priorities: &[i64],
) -> Result<Vec<Task>, ScheduleError> {
    validate_workload(execution_times, Some(priorities))?;

    Ok(execution_times
        .iter()
        .zip(priorities)
        .enumerate()
        .map(|(pid, (&exec, &priority))| Task::new(pid, exec).with_priority(priority))
        .collect())
}
