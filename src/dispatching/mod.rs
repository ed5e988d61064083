//! Dispatching rules for ordering tasks.
//!
//! A rule decides which of two ready tasks runs first. Both schedulers
//! use a rule twice: once to sort the task array before the ready queue
//! is built, and (priority scheduling only) again to re-sort the queue
//! after every quantum.
//!
//! # Usage
//!
//! ```
//! use u_cpu_schedule::dispatching::{rules, sort_tasks};
//! use u_cpu_schedule::init_sjf;
//!
//! let mut tasks = init_sjf(&[4, 1, 3]);
//! sort_tasks(&rules::ShortestExecution, &mut tasks);
//! assert_eq!(tasks[0].execution_time, 1);
//! ```
//!
//! # Tie Handling
//!
//! Rules return `Ordering::Equal` for ties and all sorting is stable, so
//! tied tasks keep their current relative order. This matches a bubble
//! sort that only swaps on strict inversion.

pub mod rules;

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::models::Task;

/// A dispatching rule that orders tasks.
///
/// `compare(a, b) == Ordering::Less` means `a` is dispatched before `b`.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Compares two tasks by dispatch order.
    fn compare(&self, a: &Task, b: &Task) -> Ordering;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Stably sorts a task array in dispatch order.
pub fn sort_tasks<R: DispatchingRule + ?Sized>(rule: &R, tasks: &mut [Task]) {
    tasks.sort_by(|a, b| rule.compare(a, b));
}
