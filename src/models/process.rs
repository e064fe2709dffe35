//! Process model.
//!
//! A process is one schedulable unit of CPU work. Its four inputs are fixed
//! at construction; the timing fields an engine derives live on a separate
//! [`CompletedProcess`] record so that no engine can observe another
//! engine's results.

use serde::{Deserialize, Serialize};

use crate::validation::{validate_process, ValidationError};

/// A process to be scheduled.
///
/// # Time Representation
/// All times are integer time units relative to the simulation epoch (t=0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: u32,
    /// Time unit at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Scheduling priority (lower value = more important).
    pub priority: i32,
    /// Total CPU time required.
    pub burst_time: i64,
}

impl Process {
    /// Creates a new process without validating it.
    ///
    /// Engines validate their whole input at entry, so an invalid record
    /// built here is rejected before any simulation starts.
    pub fn new(id: u32, arrival_time: i64, priority: i32, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            priority,
            burst_time,
        }
    }

    /// Creates a new process, rejecting a non-positive burst time or a
    /// negative arrival time.
    pub fn try_new(
        id: u32,
        arrival_time: i64,
        priority: i32,
        burst_time: i64,
    ) -> Result<Self, ValidationError> {
        let process = Self::new(id, arrival_time, priority, burst_time);
        validate_process(&process)?;
        Ok(process)
    }

    /// Whether the process has arrived by `clock`.
    #[inline]
    pub fn is_eligible_at(&self, clock: i64) -> bool {
        self.arrival_time <= clock
    }
}

/// A process with its timing metrics populated by an engine.
///
/// Only constructible through [`CompletedProcess::new`], which derives
/// turnaround and wait from start and finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedProcess {
    /// The scheduled process.
    #[serde(flatten)]
    pub process: Process,
    /// Time unit of first execution.
    pub start_time: i64,
    /// Time unit at which the last unit of burst completed.
    pub finish_time: i64,
    /// `finish_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    pub wait_time: i64,
}

impl CompletedProcess {
    /// Records a finished process and derives its turnaround and wait times.
    pub fn new(process: Process, start_time: i64, finish_time: i64) -> Self {
        let turnaround_time = finish_time - process.arrival_time;
        Self {
            process,
            start_time,
            finish_time,
            turnaround_time,
            wait_time: turnaround_time - process.burst_time,
        }
    }

    /// Process ID.
    #[inline]
    pub fn id(&self) -> u32 {
        self.process.id
    }

    /// Delay between arrival and first execution.
    #[inline]
    pub fn response_time(&self) -> i64 {
        self.start_time - self.process.arrival_time
    }
}
