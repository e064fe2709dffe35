//! Schedule (engine output) model.
//!
//! A schedule holds every completed process in the order the engine
//! finished it, and the CPU timeline as a list of execution slices.
//! Reporting order (by ID) is derived on demand; the stored order is
//! always completion order.

use serde::{Deserialize, Serialize};

use super::CompletedProcess;

/// The result of one engine run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Label of the algorithm that produced this schedule.
    pub algorithm: String,
    /// Completed processes in completion order.
    pub completed: Vec<CompletedProcess>,
    /// CPU timeline in time order.
    pub slices: Vec<ExecutionSlice>,
}

/// A contiguous interval during which one process held the CPU.
///
/// Covers `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSlice {
    /// Running process.
    pub process_id: u32,
    /// Slice start.
    pub start: i64,
    /// Slice end (exclusive).
    pub end: i64,
}

impl ExecutionSlice {
    /// Creates a new slice.
    pub fn new(process_id: u32, start: i64, end: i64) -> Self {
        Self {
            process_id,
            start,
            end,
        }
    }

    /// Length of the slice.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

impl Schedule {
    /// Creates an empty schedule for the given algorithm label.
    pub fn new(algorithm: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            ..Default::default()
        }
    }

    /// Appends a completed process.
    pub fn complete(&mut self, process: CompletedProcess) {
        self.completed.push(process);
    }

    /// Records that `process_id` ran over `[start, end)`.
    ///
    /// Merges with the previous slice when the same process continues
    /// without a gap, so a run of unit quanta reads as one slice.
    pub fn record_slice(&mut self, process_id: u32, start: i64, end: i64) {
        if let Some(last) = self.slices.last_mut() {
            if last.process_id == process_id && last.end == start {
                last.end = end;
                return;
            }
        }
        self.slices.push(ExecutionSlice::new(process_id, start, end));
    }

    /// Completed processes sorted by ascending ID (reporting order).
    pub fn by_id(&self) -> Vec<CompletedProcess> {
        let mut rows = self.completed.clone();
        rows.sort_by_key(|c| c.id());
        rows
    }

    /// Finds the completed record for a process.
    pub fn get(&self, id: u32) -> Option<&CompletedProcess> {
        self.completed.iter().find(|c| c.id() == id)
    }

    /// Process IDs in the order they completed.
    pub fn completion_order(&self) -> Vec<u32> {
        self.completed.iter().map(|c| c.id()).collect()
    }

    /// Process IDs in the order they were first dispatched.
    pub fn dispatch_order(&self) -> Vec<u32> {
        let mut order: Vec<u32> = Vec::new();
        for slice in &self.slices {
            if !order.contains(&slice.process_id) {
                order.push(slice.process_id);
            }
        }
        order
    }

    /// Latest finish time (0 for an empty schedule).
    pub fn makespan(&self) -> i64 {
        self.completed
            .iter()
            .map(|c| c.finish_time)
            .max()
            .unwrap_or(0)
    }

    /// Earliest arrival among scheduled processes.
    pub fn earliest_arrival(&self) -> Option<i64> {
        self.completed
            .iter()
            .map(|c| c.process.arrival_time)
            .min()
    }

    /// Total time the CPU spent executing processes.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(|s| s.duration()).sum()
    }

    /// Time between the earliest arrival and the makespan with no process
    /// on the CPU.
    pub fn idle_time(&self) -> i64 {
        match self.earliest_arrival() {
            Some(first) => (self.makespan() - first) - self.busy_time(),
            None => 0,
        }
    }

    /// Number of completed processes.
    pub fn len(&self) -> usize {
        self.completed.len()
    }

    /// Whether nothing was scheduled.
    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }
}
