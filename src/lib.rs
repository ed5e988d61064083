//! CPU process scheduling simulation.
//!
//! Computes per-task waiting and turnaround times for a fixed set of tasks
//! under one of two disciplines, and reports averages over the set.
//!
//! # Modules
//!
//! - **`models`**: The task record and its initializers
//! - **`queue`**: Ready queue of index handles into the caller's task slice
//! - **`dispatching`**: Ordering rules shared by queue construction and re-sorting
//! - **`scheduler`**: SJF and priority round-robin simulations, KPIs
//! - **`events`**: Observer hooks fired per dispatch, per aging step, and at the end
//! - **`validation`**: Task set integrity checks
//! - **`config`**: Policy and time quantum configuration
//! - **`workload`**: Input sets, fixed or randomly generated
//!
//! # Example
//!
//! ```
//! use u_cpu_schedule::{init_sjf, run_sjf, average_waiting_time};
//!
//! let mut tasks = init_sjf(&[3, 1, 2]);
//! run_sjf(&mut tasks).unwrap();
//!
//! let order: Vec<usize> = tasks.iter().map(|t| t.process_id).collect();
//! assert_eq!(order, vec![1, 2, 0]);
//! assert!((average_waiting_time(&tasks) - 4.0 / 3.0).abs() < 1e-9);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod dispatching;
pub mod error;
pub mod events;
pub mod models;
pub mod queue;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use config::{Policy, Quantum, SchedulerConfig};
pub use error::ScheduleError;
pub use models::{init_priority, init_sjf, Task};
pub use scheduler::{
    average_turnaround_time, average_waiting_time, run_priority, run_sjf, PriorityScheduler,
    ScheduleKpi, Scheduler, SjfScheduler,
};
