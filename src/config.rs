//! Scheduler configuration.
//!
//! Selects the scheduling policy and the preemption time quantum. Both
//! can be loaded from any serde format:
//!
//! ```
//! use u_cpu_schedule::{Policy, SchedulerConfig};
//!
//! let config: SchedulerConfig = serde_json::from_str(r#"{"policy": "sjf"}"#).unwrap();
//! assert_eq!(config.policy, Policy::Sjf);
//! assert_eq!(config.quantum.get(), 1);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ScheduleError;
use crate::scheduler::{PriorityScheduler, Scheduler, SjfScheduler};

/// Scheduling discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Policy {
    /// Non-preemptive shortest-job-first.
    Sjf,
    /// Preemptive priority round-robin with aging.
    #[default]
    Priority,
}

impl Policy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sjf => "sjf",
            Self::Priority => "priority",
        }
    }
}

impl FromStr for Policy {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sjf" | "shortest_job_first" | "shortest-job-first" => Ok(Self::Sjf),
            "priority" | "prio" | "priority_rr" => Ok(Self::Priority),
            _ => Err(ScheduleError::InvalidPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Policy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Policy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Preemption time quantum, in simulation time units.
///
/// Always at least 1, so every dispatch of an unfinished task advances
/// the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Quantum(u64);

impl Quantum {
    /// The default quantum of one time unit.
    pub const ONE: Self = Self(1);

    /// Creates a quantum, rejecting zero.
    pub fn new(units: u64) -> Result<Self, ScheduleError> {
        if units == 0 {
            return Err(ScheduleError::InvalidQuantum(units));
        }
        Ok(Self(units))
    }

    #[inline]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl Default for Quantum {
    fn default() -> Self {
        Self::ONE
    }
}

impl<'de> Deserialize<'de> for Quantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let units = u64::deserialize(deserializer)?;
        Self::new(units).map_err(serde::de::Error::custom)
    }
}

/// Complete scheduler configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Scheduling discipline.
    pub policy: Policy,
    /// Time quantum (priority policy only).
    pub quantum: Quantum,
}

impl SchedulerConfig {
    /// Creates a configuration for the given policy with a quantum of 1.
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            quantum: Quantum::ONE,
        }
    }

    /// Sets the time quantum.
    pub fn with_quantum(mut self, quantum: Quantum) -> Self {
        self.quantum = quantum;
        self
    }

    /// Builds the configured scheduler.
    pub fn build(&self) -> Box<dyn Scheduler> {
        match self.policy {
            Policy::Sjf => Box::new(SjfScheduler::new()),
            Policy::Priority => Box::new(PriorityScheduler::new().with_quantum(self.quantum)),
        }
    }
}
