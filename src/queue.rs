//! Ready queue.
//!
//! Holds index handles into a caller-owned task slice, never the tasks
//! themselves. A handle is only ever added back to the queue by an
//! explicit [`ReadyQueue::push`] after it was popped.
//!
//! Peeking or popping an empty queue yields `None`; the schedulers drive
//! their loops with `while let Some(..)` so there is no way to dispatch
//! from an empty queue.

use std::collections::VecDeque;

use crate::dispatching::DispatchingRule;
use crate::models::Task;

/// FIFO of task indices with whole-queue reordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadyQueue {
    entries: VecDeque<usize>,
}

impl ReadyQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a queue holding one handle per task, in slice order.
    pub fn from_tasks(tasks: &[Task]) -> Self {
        Self {
            entries: (0..tasks.len()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Handle at the head, without removing it.
    pub fn peek(&self) -> Option<usize> {
        self.entries.front().copied()
    }

    /// Removes and returns the head handle.
    pub fn pop(&mut self) -> Option<usize> {
        self.entries.pop_front()
    }

    /// Appends a handle at the tail.
    pub fn push(&mut self, index: usize) {
        self.entries.push_back(index);
    }

    /// Handles from head to tail.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().copied()
    }

    /// Stably re-sorts the queue by `rule`.
    ///
    /// Tied tasks keep their current queue order.
    pub fn reorder<R: DispatchingRule + ?Sized>(&mut self, rule: &R, tasks: &[Task]) {
        self.entries
            .make_contiguous()
            .sort_by(|&a, &b| rule.compare(&tasks[a], &tasks[b]));
    }
}
