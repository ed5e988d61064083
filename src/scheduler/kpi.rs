//! Schedule quality metrics (KPIs).
//!
//! Computes the per-set statistics reported after a simulation from the
//! timing fields the scheduler left in the task records.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest turnaround (completion) time |
//! | Average Waiting Time | mean(waiting_time) |
//! | Average Turnaround Time | mean(turnaround_time) |
//! | Maximum Waiting Time | Largest single waiting time |
//!
//! An empty task set reports 0.0 for both averages.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::Task;

/// Simulation performance indicators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Number of tasks in the set.
    pub task_count: usize,
    /// Latest completion time.
    pub makespan: u64,
    /// Mean waiting time across all tasks.
    pub average_waiting_time: f64,
    /// Mean turnaround time across all tasks.
    pub average_turnaround_time: f64,
    /// Largest waiting time of any single task.
    pub max_waiting_time: u64,
    /// Number of dispatches the scheduler performed.
    pub dispatch_count: usize,
}

impl ScheduleKpi {
    /// Computes KPIs from a scheduled task set.
    pub fn calculate(tasks: &[Task]) -> Self {
        Self {
            task_count: tasks.len(),
            makespan: tasks.iter().map(|t| t.turnaround_time).max().unwrap_or(0),
            average_waiting_time: average_waiting_time(tasks),
            average_turnaround_time: average_turnaround_time(tasks),
            max_waiting_time: tasks.iter().map(|t| t.waiting_time).max().unwrap_or(0),
            dispatch_count: 0,
        }
    }

    /// Sets the dispatch count.
    pub fn with_dispatch_count(mut self, dispatch_count: usize) -> Self {
        self.dispatch_count = dispatch_count;
        self
    }
}

/// Mean `waiting_time` over `tasks`.
pub fn average_waiting_time(tasks: &[Task]) -> f64 {
    mean(tasks.iter().map(|t| t.waiting_time), tasks.len())
}

/// Mean `turnaround_time` over `tasks`.
pub fn average_turnaround_time(tasks: &[Task]) -> f64 {
    mean(tasks.iter().map(|t| t.turnaround_time), tasks.len())
}

fn mean(values: impl Iterator<Item = u64>, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let total: f64 = values.map(|v| v as f64).sum();
    total / count as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished(pid: usize, exec: u64, wait: u64) -> Task {
        let mut task = Task::new(pid, exec);
        task.waiting_time = wait;
        task.turnaround_time = wait + exec;
        task
    }

    #[test]
    fn test_kpi_basic() {
        let tasks = vec![finished(0, 1, 0), finished(1, 2, 1), finished(2, 3, 3)];

        let kpi = ScheduleKpi::calculate(&tasks);
        assert_eq!(kpi.task_count, 3);
        assert_eq!(kpi.makespan, 6);
        assert_eq!(kpi.max_waiting_time, 3);
        assert!((kpi.average_waiting_time - 4.0 / 3.0).abs() < 1e-10);
        assert!((kpi.average_turnaround_time - 10.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = ScheduleKpi::calculate(&[]);
        assert_eq!(kpi.task_count, 0);
        assert_eq!(kpi.makespan, 0);
        assert!((kpi.average_waiting_time - 0.0).abs() < 1e-10);
        assert!((kpi.average_turnaround_time - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_dispatch_count() {
        let kpi = ScheduleKpi::calculate(&[finished(0, 4, 0)]).with_dispatch_count(4);
        assert_eq!(kpi.dispatch_count, 4);
    }

    #[test]
    fn test_averages_match_fields() {
        let tasks = vec![finished(0, 5, 0), finished(1, 5, 5)];
        assert!((average_waiting_time(&tasks) - 2.5).abs() < 1e-10);
        assert!((average_turnaround_time(&tasks) - 7.5).abs() < 1e-10);
    }
}
