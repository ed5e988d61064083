//! Preemptive priority round-robin scheduler with aging.
//!
//! # Algorithm
//!
//! 1. Stably sort the task array by descending priority and build the
//!    ready queue from it.
//! 2. Dispatch the head for `min(left_to_execute, quantum)` time units.
//! 3. If a different task ran in the previous quantum, the dispatched
//!    task's waiting time becomes `elapsed - time already run`. Back-to-back
//!    quanta of the same task leave it untouched.
//! 4. Turnaround time is set to the clock on every dispatch, so its final
//!    value is the completion time.
//! 5. An unfinished task is rotated to the tail; a finished one leaves.
//! 6. Aging: every task still queued has its priority multiplied by 4 if
//!    its `execution_time` equals the clock, and by 2 if its
//!    `left_to_execute` equals the clock. Both may fire.
//! 7. Stably re-sort the queue by descending priority.
//!
//! The aging triggers compare against the absolute clock, not against
//! how long a task has been waiting.
//!
//! # Complexity
//! O(T · n log n) where T is the total execution time and n the task count.

use crate::config::{Policy, Quantum};
use crate::dispatching::{rules::HighestPriority, sort_tasks};
use crate::error::ScheduleError;
use crate::events::{AgingEvent, AgingTrigger, DispatchEvent, ScheduleObserver};
use crate::models::Task;
use crate::queue::ReadyQueue;
use crate::validation::validate_tasks;

use super::{ScheduleKpi, Scheduler};

/// Priority round-robin scheduler.
///
/// # Example
///
/// ```
/// use u_cpu_schedule::{init_priority, PriorityScheduler, Scheduler};
///
/// let mut tasks = init_priority(&[1, 2, 3], &[1, 2, 3]).unwrap();
/// PriorityScheduler::new().schedule(&mut tasks).unwrap();
///
/// let priorities: Vec<i64> = tasks.iter().map(|t| t.priority).collect();
/// assert_eq!(priorities, vec![24, 16, 8]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityScheduler {
    quantum: Quantum,
}

impl PriorityScheduler {
    /// Creates a scheduler with a quantum of 1.
    pub fn new() -> Self {
        Self {
            quantum: Quantum::ONE,
        }
    }

    /// Sets the time quantum.
    pub fn with_quantum(mut self, quantum: Quantum) -> Self {
        self.quantum = quantum;
        self
    }

    /// The configured time quantum.
    pub fn quantum(&self) -> Quantum {
        self.quantum
    }
}

impl Scheduler for PriorityScheduler {
    fn policy(&self) -> Policy {
        Policy::Priority
    }

    fn schedule_observed(
        &self,
        tasks: &mut [Task],
        observer: &mut dyn ScheduleObserver,
    ) -> Result<ScheduleKpi, ScheduleError> {
        validate_tasks(tasks)?;

        sort_tasks(&HighestPriority, tasks);

        let quantum = self.quantum.get();
        let mut queue = ReadyQueue::from_tasks(tasks);
        let mut elapsed: u64 = 0;
        let mut last_ran: Option<usize> = None;
        let mut dispatches = 0;

        while let Some(idx) = queue.peek() {
            let task = &mut tasks[idx];

            let ran_for = task.left_to_execute.min(quantum);
            task.left_to_execute -= ran_for;
            elapsed += ran_for;

            if last_ran != Some(task.process_id) {
                task.waiting_time = elapsed.saturating_sub(task.executed_time());
            }
            task.turnaround_time = elapsed;
            last_ran = Some(task.process_id);

            if !task.is_finished() {
                queue.push(idx);
            }
            queue.pop();
            dispatches += 1;

            observer.on_dispatch(&DispatchEvent {
                process_id: task.process_id,
                priority: task.priority,
                ran_for,
                left_to_execute: task.left_to_execute,
                waiting_time: task.waiting_time,
                turnaround_time: task.turnaround_time,
                elapsed,
            });

            age_waiting_tasks(&queue, tasks, elapsed, observer);
            queue.reorder(&HighestPriority, tasks);
        }

        let kpi = ScheduleKpi::calculate(tasks).with_dispatch_count(dispatches);
        observer.on_finish(Policy::Priority, &kpi);
        Ok(kpi)
    }
}

/// Applies the aging boosts to every queued task, in queue order.
fn age_waiting_tasks(
    queue: &ReadyQueue,
    tasks: &mut [Task],
    elapsed: u64,
    observer: &mut dyn ScheduleObserver,
) {
    for idx in queue.iter() {
        let task = &mut tasks[idx];

        if task.execution_time == elapsed {
            boost(task, AgingTrigger::ExecutionTimeMatch, elapsed, observer);
        }
        if task.left_to_execute == elapsed {
            boost(task, AgingTrigger::RemainingTimeMatch, elapsed, observer);
        }
    }
}

fn boost(
    task: &mut Task,
    trigger: AgingTrigger,
    elapsed: u64,
    observer: &mut dyn ScheduleObserver,
) {
    let old_priority = task.priority;
    task.priority = old_priority.saturating_mul(trigger.factor());

    observer.on_aging(&AgingEvent {
        process_id: task.process_id,
        trigger,
        old_priority,
        new_priority: task.priority,
        elapsed,
    });
}
