//! Shortest-job-first scheduler.
//!
//! # Algorithm
//!
//! 1. Stably sort the task array by ascending execution time.
//! 2. Build the ready queue from the sorted array.
//! 3. Drain the queue: each task waits for the clock, runs to completion,
//!    and is never re-queued.
//!
//! Every task's waiting time is therefore the sum of the execution times
//! sorted before it, and its turnaround time is waiting + execution.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the drain.

use crate::config::Policy;
use crate::dispatching::{rules::ShortestExecution, sort_tasks};
use crate::error::ScheduleError;
use crate::events::{DispatchEvent, ScheduleObserver};
use crate::models::Task;
use crate::queue::ReadyQueue;
use crate::validation::validate_tasks;

use super::{ScheduleKpi, Scheduler};

/// Non-preemptive shortest-job-first scheduler.
///
/// # Example
///
/// ```
/// use u_cpu_schedule::{init_sjf, Scheduler, SjfScheduler};
///
/// let mut tasks = init_sjf(&[1, 2, 3]);
/// let kpi = SjfScheduler::new().schedule(&mut tasks).unwrap();
///
/// let waits: Vec<u64> = tasks.iter().map(|t| t.waiting_time).collect();
/// assert_eq!(waits, vec![0, 1, 3]);
/// assert_eq!(kpi.makespan, 6);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SjfScheduler;

impl SjfScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for SjfScheduler {
    fn policy(&self) -> Policy {
        Policy::Sjf
    }

    fn schedule_observed(
        &self,
        tasks: &mut [Task],
        observer: &mut dyn ScheduleObserver,
    ) -> Result<ScheduleKpi, ScheduleError> {
        validate_tasks(tasks)?;

        sort_tasks(&ShortestExecution, tasks);

        let mut queue = ReadyQueue::from_tasks(tasks);
        let mut elapsed: u64 = 0;
        let mut dispatches = 0;

        while let Some(idx) = queue.peek() {
            let task = &mut tasks[idx];
            task.waiting_time = elapsed;
            elapsed += task.execution_time;
            task.turnaround_time = elapsed;

            queue.pop();
            dispatches += 1;

            observer.on_dispatch(&DispatchEvent {
                process_id: task.process_id,
                priority: task.priority,
                ran_for: task.execution_time,
                left_to_execute: 0,
                waiting_time: task.waiting_time,
                turnaround_time: task.turnaround_time,
                elapsed,
            });
        }

        let kpi = ScheduleKpi::calculate(tasks).with_dispatch_count(dispatches);
        observer.on_finish(Policy::Sjf, &kpi);
        Ok(kpi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{EventLog, NoopObserver};
    use crate::models::init_sjf;

    fn run(execution: &[u64]) -> Vec<Task> {
        let mut tasks = init_sjf(execution);
        SjfScheduler::new()
            .schedule_observed(&mut tasks, &mut NoopObserver)
            .unwrap();
        tasks
    }

    #[test]
    fn test_three_tasks() {
        let tasks = run(&[1, 2, 3]);

        let pids: Vec<usize> = tasks.iter().map(|t| t.process_id).collect();
        let waits: Vec<u64> = tasks.iter().map(|t| t.waiting_time).collect();
        let turnarounds: Vec<u64> = tasks.iter().map(|t| t.turnaround_time).collect();
        assert_eq!(pids, vec![0, 1, 2]);
        assert_eq!(waits, vec![0, 1, 3]);
        assert_eq!(turnarounds, vec![1, 3, 6]);
    }

    #[test]
    fn test_sorted_larger_set() {
        let tasks = run(&[4, 7, 1, 6, 9, 10, 2, 8, 5, 3]);

        let execs: Vec<u64> = tasks.iter().map(|t| t.execution_time).collect();
        assert_eq!(execs, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);

        let mut expected_wait = 0;
        for task in &tasks {
            assert_eq!(task.waiting_time, expected_wait);
            assert_eq!(task.turnaround_time, task.waiting_time + task.execution_time);
            expected_wait += task.execution_time;
        }
    }

    #[test]
    fn test_all_zero_cost() {
        let tasks = run(&[0; 10]);

        for (i, task) in tasks.iter().enumerate() {
            assert_eq!(task.waiting_time, 0);
            assert_eq!(task.turnaround_time, 0);
            assert_eq!(task.process_id, i);
        }
    }

    #[test]
    fn test_ties_keep_input_order() {
        let tasks = run(&[3, 1, 3, 1]);
        let pids: Vec<usize> = tasks.iter().map(|t| t.process_id).collect();
        assert_eq!(pids, vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_averages() {
        let mut tasks = init_sjf(&[1, 2, 3]);
        let kpi = SjfScheduler::new()
            .schedule_observed(&mut tasks, &mut NoopObserver)
            .unwrap();

        assert!((kpi.average_waiting_time - 4.0 / 3.0).abs() < 1e-10);
        assert!((kpi.average_turnaround_time - 10.0 / 3.0).abs() < 1e-10);
        assert_eq!(kpi.dispatch_count, 3);
    }

    #[test]
    fn test_one_dispatch_per_task() {
        let mut tasks = init_sjf(&[5, 2, 9]);
        let mut log = EventLog::new();
        SjfScheduler::new()
            .schedule_observed(&mut tasks, &mut log)
            .unwrap();

        let dispatched: Vec<(usize, u64)> =
            log.dispatches().map(|d| (d.process_id, d.elapsed)).collect();
        assert_eq!(dispatched, vec![(1, 2), (0, 7), (2, 16)]);
        assert_eq!(log.agings().count(), 0);
        assert_eq!(log.events.len(), 4);
    }

    #[test]
    fn test_empty_set() {
        let mut tasks = init_sjf(&[]);
        let kpi = SjfScheduler::new().schedule(&mut tasks).unwrap();
        assert_eq!(kpi.task_count, 0);
        assert_eq!(kpi.dispatch_count, 0);
    }

    #[test]
    fn test_rejects_clock_overflow() {
        let mut tasks = init_sjf(&[u64::MAX, 1]);
        let err = SjfScheduler::new().schedule(&mut tasks).unwrap_err();

        assert!(matches!(err, ScheduleError::InvalidTaskSet(_)));
        assert_eq!(tasks[0].execution_time, u64::MAX);
        assert_eq!(tasks[0].turnaround_time, 0);
    }

    #[test]
    fn test_max_execution_time_fits() {
        let tasks = run(&[u64::MAX, 0]);
        assert_eq!(tasks[0].process_id, 1);
        assert_eq!(tasks[1].waiting_time, 0);
        assert_eq!(tasks[1].turnaround_time, u64::MAX);
    }

    #[test]
    fn test_dispatch_reports_completion() {
        let mut tasks = init_sjf(&[4]);
        let mut log = EventLog::new();
        SjfScheduler::new()
            .schedule_observed(&mut tasks, &mut log)
            .unwrap();

        let event = log.dispatches().next().unwrap();
        assert_eq!(event.left_to_execute, 0);
        assert_eq!(event.ran_for, 4);
        // The record's remaining time is left as initialized.
        assert_eq!(tasks[0].left_to_execute, 4);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let mut tasks = vec![Task::new(0, 3), Task::new(0, 1)];
        let err = SjfScheduler::new().schedule(&mut tasks).unwrap_err();

        assert!(matches!(err, ScheduleError::InvalidTaskSet(_)));
        assert_eq!(tasks[0].execution_time, 3);
    }
}
