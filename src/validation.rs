//! Input validation for process sets.
//!
//! Checks structural integrity of a workload before any engine runs.
//! Detects:
//! - Processes with a zero ID, a non-positive burst time or a negative
//!   arrival time
//! - Duplicate process IDs
//! - Sets whose completion time would not fit in an `i64` clock
//!
//! An empty process set is not an error: every engine returns an empty
//! schedule for it.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind:?}: {message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Zero ID, non-positive burst time or negative arrival time.
    InvalidProcess,
    /// Two processes share the same ID.
    DuplicateId,
    /// Latest arrival plus total burst exceeds `i64::MAX`.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a single process record.
pub fn validate_process(process: &Process) -> Result<(), ValidationError> {
    if process.id == 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidProcess,
            "Process ID must be positive, got 0",
        ));
    }
    if process.burst_time <= 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidProcess,
            format!(
                "Process {} has non-positive burst time {}",
                process.id, process.burst_time
            ),
        ));
    }
    if process.arrival_time < 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidProcess,
            format!(
                "Process {} has negative arrival time {}",
                process.id, process.arrival_time
            ),
        ));
    }
    if process.arrival_time.checked_add(process.burst_time).is_none() {
        return Err(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            format!(
                "Process {} cannot finish within the time range (arrival {}, burst {})",
                process.id, process.arrival_time, process.burst_time
            ),
        ));
    }
    Ok(())
}

/// Upper bound on every clock value an engine reaches: the latest arrival
/// plus the total burst. `None` when it overflows.
fn completion_bound(processes: &[Process]) -> Option<i64> {
    let latest = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    processes
        .iter()
        .try_fold(latest, |acc, p| acc.checked_add(p.burst_time))
}

/// Validates a whole process set.
///
/// Checks:
/// 1. Every process has `id > 0`, `burst_time > 0` and `arrival_time >= 0`
/// 2. No two processes share an ID
/// 3. The latest arrival plus the total burst fits in an `i64`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for process in processes {
        if let Err(e) = validate_process(process) {
            errors.push(e);
        }
        if !ids.insert(process.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", process.id),
            ));
        }
    }

    // Only meaningful once every burst is known to be positive
    if errors.is_empty() && completion_bound(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst overflows the time range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
