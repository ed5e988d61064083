//! Simulation inputs.
//!
//! A [`Workload`] holds the parallel input arrays a simulation starts
//! from. It can be written by hand, loaded through serde, or drawn at
//! random for stress runs.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::models::{init_priority, init_sjf, Task};

/// Execution times and (optionally) priorities of a task set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    /// Execution time per task, in input order.
    pub execution_times: Vec<u64>,
    /// Priority per task, in input order. Empty when unused.
    #[serde(default)]
    pub priorities: Vec<i64>,
}

impl Workload {
    /// Creates a workload without priorities.
    pub fn new(execution_times: Vec<u64>) -> Self {
        Self {
            execution_times,
            priorities: Vec::new(),
        }
    }

    /// Sets per-task priorities.
    pub fn with_priorities(mut self, priorities: Vec<i64>) -> Self {
        self.priorities = priorities;
        self
    }

    /// Draws `count` tasks with execution times in `0..=max_execution`
    /// and priorities in `1..=max_priority`.
    pub fn random<R: Rng>(
        rng: &mut R,
        count: usize,
        max_execution: u64,
        max_priority: i64,
    ) -> Self {
        let max_priority = max_priority.max(1);
        Self {
            execution_times: (0..count)
                .map(|_| rng.random_range(0..=max_execution))
                .collect(),
            priorities: (0..count)
                .map(|_| rng.random_range(1..=max_priority))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.execution_times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.execution_times.is_empty()
    }

    /// Total execution time across all tasks, saturating at `u64::MAX`.
    pub fn total_execution_time(&self) -> u64 {
        self.execution_times
            .iter()
            .fold(0, |total, &exec| total.saturating_add(exec))
    }

    /// Task records for shortest-job-first scheduling.
    pub fn sjf_tasks(&self) -> Vec<Task> {
        init_sjf(&self.execution_times)
    }

    /// Task records for priority scheduling.
    ///
    /// # Errors
    /// [`ScheduleError::LengthMismatch`] if priorities don't cover every task.
    pub fn priority_tasks(&self) -> Result<Vec<Task>, ScheduleError> {
        init_priority(&self.execution_times, &self.priorities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_builder() {
        let workload = Workload::new(vec![1, 2, 3]).with_priorities(vec![3, 2, 1]);

        assert_eq!(workload.len(), 3);
        assert!(!workload.is_empty());
        assert_eq!(workload.total_execution_time(), 6);
        assert_eq!(workload.sjf_tasks().len(), 3);
        assert_eq!(workload.priority_tasks().unwrap()[0].priority, 3);
    }

    #[test]
    fn test_missing_priorities() {
        let workload = Workload::new(vec![1, 2]);
        assert!(matches!(
            workload.priority_tasks(),
            Err(ScheduleError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_random_bounds() {
        let mut rng = SmallRng::seed_from_u64(42);
        let workload = Workload::random(&mut rng, 50, 10, 5);

        assert_eq!(workload.len(), 50);
        assert_eq!(workload.priorities.len(), 50);
        assert!(workload.execution_times.iter().all(|&e| e <= 10));
        assert!(workload.priorities.iter().all(|&p| (1..=5).contains(&p)));
    }

    #[test]
    fn test_random_is_seeded() {
        let a = Workload::random(&mut SmallRng::seed_from_u64(7), 20, 9, 9);
        let b = Workload::random(&mut SmallRng::seed_from_u64(7), 20, 9, 9);
        assert_eq!(a, b);
    }

    #[test]
    fn test_json_without_priorities() {
        let workload: Workload =
            serde_json::from_str(r#"{"execution_times": [4, 7, 1]}"#).unwrap();
        assert_eq!(workload.execution_times, vec![4, 7, 1]);
        assert!(workload.priorities.is_empty());
    }
}
