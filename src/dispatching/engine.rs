//! Rule engine for multi-key process selection.
//!
//! Composes selection rules into a lexicographic chain: the first rule
//! decides, later rules only break ties, and a final [`TieBreaker`] makes
//! the outcome fully deterministic.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, RuleScore, SelectionRule};
use crate::models::Process;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Keep the candidates' input order (stable).
    #[default]
    InputOrder,
    /// Lower process ID wins.
    ById,
}

/// A composable rule chain for process selection.
///
/// # Example
/// ```
/// use u_cpusched::dispatching::RuleEngine;
/// use u_cpusched::models::Process;
///
/// let engine = RuleEngine::priority();
/// let low = Process::new(1, 0, 5, 3);
/// let high = Process::new(2, 1, 1, 3);
/// assert_eq!(engine.select_best(&[&low, &high]), Some(1));
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn SelectionRule>>,
    tie_breaker: TieBreaker,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::InputOrder,
        }
    }

    /// First-Come-First-Served: arrival time, ties kept in input order.
    pub fn fcfs() -> Self {
        Self::new().with_rule(rules::EarliestArrival)
    }

    /// Shortest Job Next: burst time, then arrival, then ID.
    pub fn sjn() -> Self {
        Self::new()
            .with_rule(rules::ShortestBurst)
            .with_tie_breaker(rules::EarliestArrival)
            .with_final_tie_breaker(TieBreaker::ById)
    }

    /// Priority: lowest priority value, then arrival, then ID.
    pub fn priority() -> Self {
        Self::new()
            .with_rule(rules::HighestPriority)
            .with_tie_breaker(rules::EarliestArrival)
            .with_final_tie_breaker(TieBreaker::ById)
    }

    /// Adds a primary rule.
    pub fn with_rule<R: SelectionRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted only when all earlier rules tie.
    pub fn with_tie_breaker<R: SelectionRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Returns candidate indices sorted from most to least preferred.
    ///
    /// The sort is stable, so with [`TieBreaker::InputOrder`] fully tied
    /// candidates keep their relative input order.
    pub fn sort_indices(&self, candidates: &[&Process]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..candidates.len()).collect();
        indices.sort_by(|&a, &b| self.compare(candidates[a], candidates[b]));
        indices
    }

    /// Returns the index of the most preferred candidate.
    ///
    /// Among fully tied candidates the earliest in the slice wins.
    pub fn select_best(&self, candidates: &[&Process]) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, candidate) in candidates.iter().enumerate() {
            match best {
                Some(b) if self.compare(candidate, candidates[b]) != Ordering::Less => {}
                _ => best = Some(i),
            }
        }
        best
    }

    /// Evaluates a single process and returns the score from each rule.
    pub fn evaluate(&self, process: &Process) -> Vec<RuleScore> {
        self.rules.iter().map(|r| r.evaluate(process)).collect()
    }

    /// Compares two candidates through the whole rule chain.
    pub fn compare(&self, a: &Process, b: &Process) -> Ordering {
        for rule in &self.rules {
            let ord = rule.evaluate(a).cmp(&rule.evaluate(b));
            if ord != Ordering::Equal {
                return ord;
            }
        }

        match self.tie_breaker {
            TieBreaker::InputOrder => Ordering::Equal,
            TieBreaker::ById => a.id.cmp(&b.id),
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}
