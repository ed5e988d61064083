//! Built-in dispatching rules.
//!
//! - **Time-based**: SJF (shortest execution time first)
//! - **Priority**: PRIORITY (highest priority value first)
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2-5.3.4

use std::cmp::Ordering;

use super::DispatchingRule;
use crate::models::Task;

/// Shortest Job First.
///
/// Orders tasks by ascending total execution time. Minimizes average
/// waiting time for a set of tasks that are all ready at t=0.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct ShortestExecution;

impl DispatchingRule for ShortestExecution {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn compare(&self, a: &Task, b: &Task) -> Ordering {
        a.execution_time.cmp(&b.execution_time)
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Highest Priority First.
///
/// Orders tasks by descending `priority` (larger value runs first).
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl DispatchingRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn compare(&self, a: &Task, b: &Task) -> Ordering {
        b.priority.cmp(&a.priority)
    }

    fn description(&self) -> &'static str {
        "Highest Priority First"
    }
}
