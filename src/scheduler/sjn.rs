//! Non-preemptive Shortest Job Next scheduler.
//!
//! # Algorithm
//!
//! Repeat until no process remains:
//! 1. Collect remaining processes with `arrival <= clock`.
//! 2. If none, jump the clock to the earliest remaining arrival and retry.
//! 3. Otherwise pick the shortest burst (ties: earlier arrival, then lower ID).
//! 4. Run it to completion: `start = clock`, `clock = start + burst`.
//!
//! A job that arrives while another is running waits for it to finish,
//! however short it is.
//!
//! # Complexity
//! O(n²): each selection scans the remaining set.

use tracing::{debug, info, trace};

use super::{next_arrival, prepare, Algorithm, CpuScheduler, ScheduleError};
use crate::dispatching::RuleEngine;
use crate::models::{CompletedProcess, Process, Schedule};

/// Non-preemptive Shortest Job Next scheduler.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::{CpuScheduler, SjnScheduler};
///
/// let processes = vec![
///     Process::new(1, 0, 1, 8),
///     Process::new(2, 0, 1, 2),
/// ];
/// let schedule = SjnScheduler::new().schedule(&processes).unwrap();
/// assert_eq!(schedule.completion_order(), vec![2, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct SjnScheduler {
    rule_engine: RuleEngine,
}

impl SjnScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self {
            rule_engine: RuleEngine::sjn(),
        }
    }

    /// Replaces the selection rule chain.
    pub fn with_rule_engine(mut self, engine: RuleEngine) -> Self {
        self.rule_engine = engine;
        self
    }
}

impl Default for SjnScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuScheduler for SjnScheduler {
    fn name(&self) -> &'static str {
        Algorithm::Sjn.label()
    }

    fn schedule(&self, processes: &[Process]) -> Result<Schedule, ScheduleError> {
        let mut remaining = prepare(processes)?;
        let mut schedule = Schedule::new(self.name());
        let mut clock = 0;

        while !remaining.is_empty() {
            let eligible: Vec<usize> = (0..remaining.len())
                .filter(|&i| remaining[i].is_eligible_at(clock))
                .collect();

            if eligible.is_empty() {
                let Some(next) = next_arrival(remaining.iter()) else {
                    break;
                };
                trace!(from = clock, to = next, "cpu idle");
                clock = next;
                continue;
            }

            let candidates: Vec<&Process> = eligible.iter().map(|&i| &remaining[i]).collect();
            let Some(best) = self.rule_engine.select_best(&candidates) else {
                break;
            };
            let process = remaining.remove(eligible[best]);

            let start = process.arrival_time.max(clock);
            let finish = start + process.burst_time;
            debug!(
                pid = process.id,
                clock,
                eligible = eligible.len(),
                finish,
                "sjn dispatch"
            );

            schedule.record_slice(process.id, start, finish);
            schedule.complete(CompletedProcess::new(process, start, finish));
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
