//! CPU scheduling domain models.
//!
//! Provides the input record for a schedulable process, the completed
//! record an engine produces for it, and the schedule that collects a
//! whole engine run.
//!
//! # Lifecycle
//!
//! | Stage | Type | Owner |
//! |-------|------|-------|
//! | Input | `Process` | Caller (never mutated) |
//! | Output row | `CompletedProcess` | Engine, then presenter |
//! | Engine run | `Schedule` | Engine, then presenter |

mod process;
mod schedule;

pub use process::{CompletedProcess, Process};
pub use schedule::{ExecutionSlice, Schedule};
