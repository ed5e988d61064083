//! CPU schedulers and KPI evaluation.
//!
//! # Algorithms
//!
//! - `SjfScheduler`: non-preemptive shortest-job-first. Sorts once by
//!   execution time, then runs every task to completion.
//! - `PriorityScheduler`: preemptive priority round-robin. Runs the head
//!   of the ready queue for one quantum, ages waiting tasks, and re-sorts
//!   the queue before the next quantum.
//!
//! Both take a caller-owned task slice, reorder it by their initial sort,
//! and leave the computed timing fields in place.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4.3

mod kpi;
mod priority;
mod sjf;

pub use kpi::{average_turnaround_time, average_waiting_time, ScheduleKpi};
pub use priority::PriorityScheduler;
pub use sjf::SjfScheduler;

use std::fmt::Debug;

use crate::config::Policy;
use crate::error::ScheduleError;
use crate::events::{LogObserver, ScheduleObserver};
use crate::models::Task;

/// A scheduling discipline that simulates a task set in place.
pub trait Scheduler: Debug {
    /// The discipline this scheduler implements.
    fn policy(&self) -> Policy;

    /// Runs the simulation, reporting progress to `observer`.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidTaskSet`] if the task set fails validation.
    /// Tasks are left untouched in that case.
    fn schedule_observed(
        &self,
        tasks: &mut [Task],
        observer: &mut dyn ScheduleObserver,
    ) -> Result<ScheduleKpi, ScheduleError>;

    /// Runs the simulation, logging progress through the `log` facade.
    fn schedule(&self, tasks: &mut [Task]) -> Result<ScheduleKpi, ScheduleError> {
        self.schedule_observed(tasks, &mut LogObserver)
    }
}

/// Runs shortest-job-first over `tasks` in place.
pub fn run_sjf(tasks: &mut [Task]) -> Result<ScheduleKpi, ScheduleError> {
    SjfScheduler::new().schedule(tasks)
}

/// Runs priority round-robin (quantum 1) over `tasks` in place.
pub fn run_priority(tasks: &mut [Task]) -> Result<ScheduleKpi, ScheduleError> {
    PriorityScheduler::new().schedule(tasks)
}
