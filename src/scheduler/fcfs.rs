//! First-Come-First-Served scheduler.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival time (equal arrivals keep input order).
//! 2. Walk the sorted list with a running clock starting at 0.
//! 3. `start = max(arrival, clock)`, `finish = start + burst`, `clock = finish`.
//!
//! The `max` covers idle gaps; no other idle handling is needed.
//!
//! # Complexity
//! O(n log n) for the sort.

use tracing::{debug, info};

use super::{prepare, Algorithm, CpuScheduler, ScheduleError};
use crate::dispatching::RuleEngine;
use crate::models::{CompletedProcess, Process, Schedule};

/// Non-preemptive First-Come-First-Served scheduler.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::{CpuScheduler, FcfsScheduler};
///
/// let processes = vec![Process::new(1, 2, 3, 3), Process::new(2, 2, 2, 4)];
/// let schedule = FcfsScheduler::new().schedule(&processes).unwrap();
/// assert_eq!(schedule.get(2).unwrap().start_time, 5);
/// ```
#[derive(Debug, Clone)]
pub struct FcfsScheduler {
    rule_engine: RuleEngine,
}

impl FcfsScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self {
            rule_engine: RuleEngine::fcfs(),
        }
    }

    /// Replaces the ordering rule chain.
    pub fn with_rule_engine(mut self, engine: RuleEngine) -> Self {
        self.rule_engine = engine;
        self
    }
}

impl Default for FcfsScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuScheduler for FcfsScheduler {
    fn name(&self) -> &'static str {
        Algorithm::Fcfs.label()
    }

    fn schedule(&self, processes: &[Process]) -> Result<Schedule, ScheduleError> {
        let processes = prepare(processes)?;
        let mut schedule = Schedule::new(self.name());

        let candidates: Vec<&Process> = processes.iter().collect();
        let order = self.rule_engine.sort_indices(&candidates);

        let mut clock = 0;
        for idx in order {
            let process = candidates[idx];
            let start = process.arrival_time.max(clock);
            let finish = start + process.burst_time;
            debug!(pid = process.id, start, finish, "fcfs dispatch");

            schedule.record_slice(process.id, start, finish);
            schedule.complete(CompletedProcess::new(*process, start, finish));
            clock = finish;
        }

        info!(
            algorithm = self.name(),
            processes = schedule.len(),
            makespan = schedule.makespan(),
            "schedule complete"
        );
        Ok(schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workload::sample_workload;

    fn timing(schedule: &Schedule, id: u32) -> (i64, i64, i64, i64) {
        let c = schedule.get(id).unwrap();
        (c.start_time, c.finish_time, c.turnaround_time, c.wait_time)
    }

    #[test]
    fn test_sample_trace() {
        let schedule = FcfsScheduler::new().schedule(&sample_workload()).unwrap();

        assert_eq!(timing(&schedule, 1), (2, 5, 3, 0));
        assert_eq!(timing(&schedule, 2), (5, 9, 7, 3));
        assert_eq!(timing(&schedule, 3), (9, 10, 7, 6));
        assert_eq!(timing(&schedule, 4), (10, 12, 7, 5));
        assert_eq!(schedule.completion_order(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_equal_arrival_keeps_input_order() {
        let processes = vec![Process::new(9, 0, 1, 2), Process::new(1, 0, 1, 2)];
        let schedule = FcfsScheduler::new().schedule(&processes).unwrap();
        assert_eq!(schedule.completion_order(), vec![9, 1]);
    }

    #[test]
    fn test_idle_gap() {
        let processes = vec![Process::new(1, 0, 1, 2), Process::new(2, 10, 1, 3)];
        let schedule = FcfsScheduler::new().schedule(&processes).unwrap();

        assert_eq!(timing(&schedule, 2), (10, 13, 3, 0));
        assert_eq!(schedule.idle_time(), 8);
    }

    #[test]
    fn test_unsorted_input() {
        let processes = vec![Process::new(1, 6, 1, 1), Process::new(2, 0, 1, 4)];
        let schedule = FcfsScheduler::new().schedule(&processes).unwrap();

        assert_eq!(schedule.completion_order(), vec![2, 1]);
        assert_eq!(timing(&schedule, 1), (6, 7, 1, 0));
    }

    #[test]
    fn test_input_untouched_and_repeatable() {
        let processes = sample_workload();
        let before = processes.clone();
        let scheduler = FcfsScheduler::new();

        let first = scheduler.schedule(&processes).unwrap();
        let second = scheduler.schedule(&processes).unwrap();
        assert_eq!(first, second);
        assert_eq!(processes, before);
    }

    #[test]
    fn test_slices_match_rows() {
        let schedule = FcfsScheduler::new().schedule(&sample_workload()).unwrap();
        assert_eq!(schedule.slices.len(), 4);
        for slice in &schedule.slices {
            let row = schedule.get(slice.process_id).unwrap();
            assert_eq!((slice.start, slice.end), (row.start_time, row.finish_time));
        }
    }
}
