//! Simulation events and observers.
//!
//! The schedulers own no formatting or I/O. They report progress through
//! a [`ScheduleObserver`]: once per dispatch, once per aging boost, and
//! once with the final KPIs. [`LogObserver`] renders these through the
//! `log` facade; [`EventLog`] keeps them in memory.

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use crate::config::Policy;
use crate::scheduler::ScheduleKpi;

/// Snapshot of a task right after it was dispatched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchEvent {
    /// Dispatched task.
    pub process_id: usize,
    /// Priority at dispatch time.
    pub priority: i64,
    /// Time units run by this dispatch.
    pub ran_for: u64,
    /// Time still owed after this dispatch.
    ///
    /// Shortest-job-first runs every task to completion and reports 0
    /// here, although it never updates the record's `left_to_execute`.
    pub left_to_execute: u64,
    pub waiting_time: u64,
    pub turnaround_time: u64,
    /// Simulation clock after this dispatch.
    pub elapsed: u64,
}

/// Which coincidence fired an aging boost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgingTrigger {
    /// `execution_time` equals the clock; priority ×4.
    ExecutionTimeMatch,
    /// `left_to_execute` equals the clock; priority ×2.
    RemainingTimeMatch,
}

impl AgingTrigger {
    /// Priority multiplier applied by this trigger.
    pub const fn factor(&self) -> i64 {
        match self {
            Self::ExecutionTimeMatch => 4,
            Self::RemainingTimeMatch => 2,
        }
    }
}

/// A priority boost applied to a waiting task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgingEvent {
    pub process_id: usize,
    pub trigger: AgingTrigger,
    pub old_priority: i64,
    pub new_priority: i64,
    /// Simulation clock at which the boost fired.
    pub elapsed: u64,
}

/// Any event emitted during a simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScheduleEvent {
    Dispatch(DispatchEvent),
    Aging(AgingEvent),
    Finish { policy: Policy, kpi: ScheduleKpi },
}

/// Receives simulation events. All hooks default to no-ops.
pub trait ScheduleObserver {
    fn on_dispatch(&mut self, _event: &DispatchEvent) {}

    fn on_aging(&mut self, _event: &AgingEvent) {}

    fn on_finish(&mut self, _policy: Policy, _kpi: &ScheduleKpi) {}
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ScheduleObserver for NoopObserver {}

/// Writes events to the `log` facade.
///
/// Dispatches go to `debug`, aging boosts to `trace`, final averages to
/// `info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl ScheduleObserver for LogObserver {
    fn on_dispatch(&mut self, e: &DispatchEvent) {
        debug!(
            "Task[{}] t={} ran={} priority={} left={} wait={} turnaround={}",
            e.process_id,
            e.elapsed,
            e.ran_for,
            e.priority,
            e.left_to_execute,
            e.waiting_time,
            e.turnaround_time
        );
    }

    fn on_aging(&mut self, e: &AgingEvent) {
        trace!(
            "Task[{}] aged at t={} ({:?}): priority {} -> {}",
            e.process_id,
            e.elapsed,
            e.trigger,
            e.old_priority,
            e.new_priority
        );
    }

    fn on_finish(&mut self, policy: Policy, kpi: &ScheduleKpi) {
        info!(
            "{} finished {} tasks at t={}: average wait {:.6}, average turnaround {:.6}",
            policy,
            kpi.task_count,
            kpi.makespan,
            kpi.average_waiting_time,
            kpi.average_turnaround_time
        );
    }
}

/// Records every event in order.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    pub events: Vec<ScheduleEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch events, in order.
    pub fn dispatches(&self) -> impl Iterator<Item = &DispatchEvent> {
        self.events.iter().filter_map(|e| match e {
            ScheduleEvent::Dispatch(d) => Some(d),
            _ => None,
        })
    }

    /// Aging events, in order.
    pub fn agings(&self) -> impl Iterator<Item = &AgingEvent> {
        self.events.iter().filter_map(|e| match e {
            ScheduleEvent::Aging(a) => Some(a),
            _ => None,
        })
    }
}

impl ScheduleObserver for EventLog {
    fn on_dispatch(&mut self, event: &DispatchEvent) {
        self.events.push(ScheduleEvent::Dispatch(event.clone()));
    }

    fn on_aging(&mut self, event: &AgingEvent) {
        self.events.push(ScheduleEvent::Aging(event.clone()));
    }

    fn on_finish(&mut self, policy: Policy, kpi: &ScheduleKpi) {
        self.events.push(ScheduleEvent::Finish {
            policy,
            kpi: kpi.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatch(pid: usize, elapsed: u64) -> DispatchEvent {
        DispatchEvent {
            process_id: pid,
            priority: 1,
            ran_for: 1,
            left_to_execute: 0,
            waiting_time: elapsed - 1,
            turnaround_time: elapsed,
            elapsed,
        }
    }

    #[test]
    fn test_event_log_filters() {
        let mut log = EventLog::new();
        log.on_dispatch(&dispatch(0, 1));
        log.on_aging(&AgingEvent {
            process_id: 1,
            trigger: AgingTrigger::RemainingTimeMatch,
            old_priority: 3,
            new_priority: 6,
            elapsed: 1,
        });
        log.on_dispatch(&dispatch(1, 2));

        assert_eq!(log.events.len(), 3);
        let pids: Vec<usize> = log.dispatches().map(|d| d.process_id).collect();
        assert_eq!(pids, vec![0, 1]);
        assert_eq!(log.agings().count(), 1);
    }

    #[test]
    fn test_trigger_factors() {
        assert_eq!(AgingTrigger::ExecutionTimeMatch.factor(), 4);
        assert_eq!(AgingTrigger::RemainingTimeMatch.factor(), 2);
    }

    #[test]
    fn test_event_json_tagged() {
        let event = ScheduleEvent::Dispatch(dispatch(2, 5));
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["event"], "dispatch");
        assert_eq!(json["process_id"], 2);
        assert_eq!(json["elapsed"], 5);
    }

    #[test]
    fn test_noop_and_log_observers_accept_events() {
        let mut observers: Vec<Box<dyn ScheduleObserver>> =
            vec![Box::new(NoopObserver), Box::new(LogObserver)];
        for observer in &mut observers {
            observer.on_dispatch(&dispatch(0, 1));
            observer.on_finish(Policy::Sjf, &ScheduleKpi::calculate(&[]));
        }
    }
}
