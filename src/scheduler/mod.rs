//! CPU scheduling engines and KPI evaluation.
//!
//! Three independent engines share one contract: take a process set by
//! reference, validate it, simulate on a private copy and return a
//! [`Schedule`]. No engine keeps state between calls, so running them in
//! any order (or twice) gives the same results.
//!
//! | Engine | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | `FcfsScheduler` | no | arrival time (stable) |
//! | `SjnScheduler` | no | burst time, arrival, ID |
//! | `PriorityScheduler` | every quantum | priority value, arrival, ID |
//!
//! # KPI
//!
//! `ScheduleKpi` summarizes a schedule: averages of turnaround, wait and
//! response, CPU utilization, throughput and context switches.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

mod fcfs;
mod kpi;
mod priority;
mod sjn;

pub use fcfs::FcfsScheduler;
pub use kpi::ScheduleKpi;
pub use priority::{PriorityScheduler, DEFAULT_QUANTUM};
pub use sjn::SjnScheduler;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::models::{Process, Schedule};
use crate::validation::{validate_processes, ValidationError};

/// Errors returned by an engine before simulation starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The process set failed validation.
    #[error("invalid process set: {}", join_messages(.0))]
    Invalid(Vec<ValidationError>),
    /// The priority engine was configured with a non-positive quantum.
    #[error("time quantum must be positive, got {0}")]
    InvalidQuantum(i64),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// A CPU scheduling discipline.
pub trait CpuScheduler: Send + Sync + fmt::Debug {
    /// Display label of the discipline.
    fn name(&self) -> &'static str;

    /// Schedules a process set.
    ///
    /// The input is never mutated; the engine works on its own copy.
    /// An empty input yields an empty schedule.
    fn schedule(&self, processes: &[Process]) -> Result<Schedule, ScheduleError>;
}

/// The available disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Non-preemptive Shortest Job Next.
    Sjn,
    /// Preemptive priority with a fixed time quantum.
    Priority,
}

impl Algorithm {
    /// Every discipline, in reporting order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Fcfs, Algorithm::Sjn, Algorithm::Priority];

    /// Display label used as the report heading.
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "First Come First Serve",
            Algorithm::Sjn => "Shortest Job Next",
            Algorithm::Priority => "Preemptive Priority",
        }
    }

    /// Creates an engine for this discipline with default settings.
    pub fn scheduler(&self) -> Box<dyn CpuScheduler> {
        match self {
            Algorithm::Fcfs => Box::new(FcfsScheduler::new()),
            Algorithm::Sjn => Box::new(SjnScheduler::new()),
            Algorithm::Priority => Box::new(PriorityScheduler::new()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(Algorithm::Fcfs),
            "sjn" | "sjf" => Ok(Algorithm::Sjn),
            "priority" | "prio" => Ok(Algorithm::Priority),
            other => Err(format!(
                "unknown algorithm '{other}' (expected fcfs, sjn or priority)"
            )),
        }
    }
}

/// Validates the input and returns the engine's private copy of it.
pub(crate) fn prepare(processes: &[Process]) -> Result<Vec<Process>, ScheduleError> {
    if let Err(errors) = validate_processes(processes) {
        warn!(errors = errors.len(), "rejecting invalid process set");
        return Err(ScheduleError::Invalid(errors));
    }
    Ok(processes.to_vec())
}

/// Earliest arrival among processes not yet completed.
pub(crate) fn next_arrival<'a>(pending: impl Iterator<Item = &'a Process>) -> Option<i64> {
    pending.map(|p| p.arrival_time).min()
}
