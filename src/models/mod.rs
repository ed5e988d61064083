//! Scheduling domain models.
//!
//! A simulation works on a caller-owned slice of [`Task`] records. The
//! schedulers reorder the slice and fill in the timing fields in place;
//! `process_id` is the only stable handle back to the caller's original
//! order.
//!
//! # Field Lifecycle
//!
//! | Field | Set by | Mutated by |
//! |-------|--------|-----------|
//! | `process_id` | initializer | never |
//! | `execution_time` | initializer | never |
//! | `left_to_execute` | initializer | priority scheduler |
//! | `waiting_time` | initializer (0) | both schedulers |
//! | `turnaround_time` | initializer (0) | both schedulers |
//! | `priority` | initializer | priority scheduler (aging) |

mod task;

pub use task::{init_priority, init_sjf, Task};
