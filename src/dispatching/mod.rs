//! Selection rules and rule engine for picking the next process.
//!
//! Every engine reduces "which eligible process runs next" to a chain of
//! integer-scored rules evaluated in order, with a final deterministic
//! tie-breaker. The three disciplines differ only in their chain.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{rules, RuleEngine, TieBreaker};
//! use u_cpusched::models::Process;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::ShortestBurst)
//!     .with_tie_breaker(rules::EarliestArrival)
//!     .with_final_tie_breaker(TieBreaker::ById);
//!
//! let a = Process::new(1, 0, 1, 5);
//! let b = Process::new(2, 0, 1, 2);
//! assert_eq!(engine.select_best(&[&a, &b]), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod engine;
pub mod rules;

pub use engine::{RuleEngine, TieBreaker};

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// Lower scores = selected first.
pub type RuleScore = i64;

/// A rule that scores a candidate process.
///
/// # Score Convention
/// **Lower score = higher preference.** Rules return smaller values for
/// processes that should be dispatched first.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJN", "FCFS").
    fn name(&self) -> &'static str;

    /// Scores a candidate process.
    fn evaluate(&self, process: &Process) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
