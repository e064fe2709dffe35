//! Preemptive priority scheduler with a fixed time quantum.
//!
//! # Algorithm
//!
//! Each process carries its remaining burst. Repeat until none remains:
//! 1. Collect remaining processes with `arrival <= clock`.
//! 2. If none, jump the clock to the earliest remaining arrival and retry.
//! 3. Pick the lowest priority value (ties: earlier arrival, then lower ID).
//! 4. On its first dispatch, record `start = clock`.
//! 5. Run it for `min(quantum, remaining)` units and advance the clock.
//! 6. If nothing remains, record `finish = clock` and retire it; otherwise it
//!    competes again at the next step.
//!
//! Selection is re-derived at every quantum boundary, so a more urgent
//! arrival preempts the running process within one quantum.
//!
//! # Complexity
//! O(n · B / q) where B is the total burst and q the quantum.

use tracing::{debug, info, trace};

use super::{next_arrival, prepare, Algorithm, CpuScheduler, ScheduleError};
use crate::dispatching::RuleEngine;
use crate::models::{CompletedProcess, Process, Schedule};

/// Default time quantum.
pub const DEFAULT_QUANTUM: i64 = 1;

/// A process in flight.
#[derive(Debug, Clone)]
struct RunState {
    process: Process,
    remaining: i64,
    start_time: Option<i64>,
}

impl RunState {
    fn new(process: Process) -> Self {
        Self {
            process,
            remaining: process.burst_time,
            start_time: None,
        }
    }
}

/// Preemptive priority scheduler.
///
/// Lower `priority` values run first.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::{CpuScheduler, PriorityScheduler};
///
/// let processes = vec![
///     Process::new(1, 0, 5, 4), // low priority, runs first
///     Process::new(2, 1, 1, 1), // arrives at 1 and preempts
/// ];
/// let schedule = PriorityScheduler::new().schedule(&processes).unwrap();
/// assert_eq!(schedule.get(2).unwrap().finish_time, 2);
/// assert_eq!(schedule.get(1).unwrap().finish_time, 5);
/// ```
#[derive(Debug, Clone)]
pub struct PriorityScheduler {
    rule_engine: RuleEngine,
    quantum: i64,
}

impl PriorityScheduler {
    /// Creates a new scheduler with a unit quantum.
    pub fn new() -> Self {
        Self {
            rule_engine: RuleEngine::priority(),
            quantum: DEFAULT_QUANTUM,
        }
    }

    /// Sets the time quantum. Must be positive.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Replaces the selection rule chain.
    pub fn with_rule_engine(mut self, engine: RuleEngine) -> Self {
        self.rule_engine = engine;
        self
    }

    /// Configured time quantum.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl Default for PriorityScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuScheduler for PriorityScheduler {
    fn name(&self) -> &'static str {
        Algorithm::Priority.label()
    }

    fn schedule(&self, processes: &[Process]) -> Result<Schedule, ScheduleError> {
        if self.quantum <= 0 {
            return Err(ScheduleError::InvalidQuantum(self.quantum));
        }
        let mut remaining: Vec<RunState> = prepare(processes)?
            .into_iter()
            .map(RunState::new)
            .collect();
        let mut schedule = Schedule::new(self.name());
        let mut clock = 0;

        while !remaining.is_empty() {
            let eligible: Vec<usize> = (0..remaining.len())
                .filter(|&i| remaining[i].process.is_eligible_at(clock))
                .collect();

            if eligible.is_empty() {
                let Some(next) = next_arrival(remaining.iter().map(|s| &s.process)) else {
                    break;
                };
                trace!(from = clock, to = next, "cpu idle");
                clock = next;
                continue;
            }

            let candidates: Vec<&Process> =
                eligible.iter().map(|&i| &remaining[i].process).collect();
            let Some(best) = self.rule_engine.select_best(&candidates) else {
                break;
            };
            let idx = eligible[best];

            let state = &mut remaining[idx];
            let start = *state.start_time.get_or_insert(clock);
            let run = self.quantum.min(state.remaining);
            state.remaining -= run;
            let done = state.remaining == 0;
            let pid = state.process.id;

            trace!(pid, clock, run, left = state.remaining, "priority quantum");
            schedule.record_slice(pid, clock, clock + run);
            clock += run;

            if done {
                let finished = remaining.remove(idx);
                debug!(pid, start, finish = clock, "priority complete");
                schedule.complete(CompletedProcess::new(finished.process, start, clock));
            }
        }

        info!(
            algorithm = self.name(),
            processes = schedule.len(),
            makespan = schedule.makespan(),
            quantum = self.quantum,
            "schedule complete"
        );
        Ok(schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExecutionSlice;
    use crate::workload::sample_workload;

    fn timing(schedule: &Schedule, id: u32) -> (i64, i64, i64, i64) {
        let c = schedule.get(id).unwrap();
        (c.start_time, c.finish_time, c.turnaround_time, c.wait_time)
    }

    #[test]
    fn test_sample_trace() {
        let schedule = PriorityScheduler::new().schedule(&sample_workload()).unwrap();

        // 2 wins at t=2, 3 preempts at t=3, 2 resumes, then 1 and 4 (equal
        // priority) in arrival order.
        assert_eq!(
            schedule.slices,
            vec![
                ExecutionSlice::new(2, 2, 3),
                ExecutionSlice::new(3, 3, 4),
                ExecutionSlice::new(2, 4, 7),
                ExecutionSlice::new(1, 7, 10),
                ExecutionSlice::new(4, 10, 12),
            ]
        );
        assert_eq!(timing(&schedule, 3), (3, 4, 1, 0));
        assert_eq!(timing(&schedule, 2), (2, 7, 5, 1));
        assert_eq!(timing(&schedule, 1), (7, 10, 8, 5));
        assert_eq!(timing(&schedule, 4), (10, 12, 7, 5));
        assert_eq!(schedule.completion_order(), vec![3, 2, 1, 4]);
    }

    #[test]
    fn test_start_at_time_zero_is_kept() {
        // 1 starts at 0, is preempted, and resumes later: start must stay 0
        let processes = vec![Process::new(1, 0, 5, 3), Process::new(2, 1, 1, 2)];
        let schedule = PriorityScheduler::new().schedule(&processes).unwrap();

        assert_eq!(timing(&schedule, 1), (0, 5, 5, 2));
        assert_eq!(timing(&schedule, 2), (1, 3, 2, 0));
    }

    #[test]
    fn test_preemption_delays_finish() {
        let alone = vec![Process::new(1, 0, 5, 4)];
        let contended = vec![Process::new(1, 0, 5, 4), Process::new(2, 2, 1, 3)];

        let scheduler = PriorityScheduler::new();
        let solo = scheduler.schedule(&alone).unwrap();
        let shared = scheduler.schedule(&contended).unwrap();

        assert_eq!(solo.get(1).unwrap().finish_time, 4);
        assert_eq!(shared.get(1).unwrap().finish_time, 7);
        // Interrupted exactly at the arrival of the urgent process
        assert_eq!(shared.slices[0], ExecutionSlice::new(1, 0, 2));
    }

    #[test]
    fn test_idle_advance() {
        let processes = vec![Process::new(1, 4, 1, 2), Process::new(2, 10, 1, 1)];
        let schedule = PriorityScheduler::new().schedule(&processes).unwrap();

        assert_eq!(timing(&schedule, 1), (4, 6, 2, 0));
        assert_eq!(timing(&schedule, 2), (10, 11, 1, 0));
    }

    #[test]
    fn test_tie_breaks_by_arrival_then_id() {
        let processes = vec![
            Process::new(3, 0, 1, 1),
            Process::new(2, 0, 1, 1),
            Process::new(1, 1, 1, 1),
        ];
        let schedule = PriorityScheduler::new().schedule(&processes).unwrap();
        assert_eq!(schedule.completion_order(), vec![2, 3, 1]);
    }

    #[test]
    fn test_larger_quantum_delays_preemption() {
        let processes = vec![Process::new(1, 0, 5, 4), Process::new(2, 1, 1, 1)];
        let schedule = PriorityScheduler::new()
            .with_quantum(3)
            .schedule(&processes)
            .unwrap();

        // 1 holds the CPU for a full quantum before 2 can run
        assert_eq!(timing(&schedule, 2), (3, 4, 3, 2));
        assert_eq!(timing(&schedule, 1), (0, 5, 5, 1));
    }

    #[test]
    fn test_invalid_quantum() {
        let err = PriorityScheduler::new()
            .with_quantum(0)
            .schedule(&sample_workload())
            .unwrap_err();
        assert_eq!(err, ScheduleError::InvalidQuantum(0));
    }

    #[test]
    fn test_input_untouched() {
        let processes = sample_workload();
        let before = processes.clone();
        let _ = PriorityScheduler::new().schedule(&processes).unwrap();
        assert_eq!(processes, before);
    }
}
