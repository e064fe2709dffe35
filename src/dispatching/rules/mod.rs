//! Built-in selection rules.
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{RuleScore, SelectionRule};
use crate::models::Process;

/// Earliest arrival first.
///
/// The ordering key of First-Come-First-Served.
#[derive(Debug, Clone, Copy)]
pub struct EarliestArrival;

impl SelectionRule for EarliestArrival {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.arrival_time
    }

    fn description(&self) -> &'static str {
        "Earliest Arrival"
    }
}

/// Shortest burst first.
///
/// The selection key of non-preemptive Shortest Job Next.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJN"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Job Next"
    }
}

/// Lowest priority value first.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl SelectionRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        RuleScore::from(process.priority)
    }

    fn description(&self) -> &'static str {
        "Highest Priority (lowest value)"
    }
}

/// Lowest process ID first.
#[derive(Debug, Clone, Copy)]
pub struct LowestId;

impl SelectionRule for LowestId {
    fn name(&self) -> &'static str {
        "ID"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        RuleScore::from(process.id)
    }

    fn description(&self) -> &'static str {
        "Lowest Process ID"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_scores() {
        let p = Process::new(7, 3, -2, 9);
        assert_eq!(EarliestArrival.evaluate(&p), 3);
        assert_eq!(ShortestBurst.evaluate(&p), 9);
        assert_eq!(HighestPriority.evaluate(&p), -2);
        assert_eq!(LowestId.evaluate(&p), 7);
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(EarliestArrival.name(), "FCFS");
        assert_eq!(ShortestBurst.description(), "Shortest Job Next");
        assert_eq!(LowestId.description(), "Lowest Process ID");
    }
}
