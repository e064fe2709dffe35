//! Workload sources: the built-in sample set, JSON files and seeded
//! random generation.
//!
//! A JSON workload is an array of process records:
//!
//! ```json
//! [
//!   { "id": 1, "arrival_time": 2, "priority": 3, "burst_time": 3 },
//!   { "id": 2, "arrival_time": 2, "priority": 2, "burst_time": 4 }
//! ]
//! ```

use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::debug;

use crate::models::Process;
use crate::scheduler::ScheduleError;
use crate::validation::validate_processes;

/// Errors raised while loading a workload.
#[derive(Debug, Error)]
pub enum WorkloadError {
    /// The workload file could not be read.
    #[error("failed to read workload: {0}")]
    Io(#[from] std::io::Error),
    /// The workload file is not a valid JSON process array.
    #[error("failed to parse workload: {0}")]
    Parse(#[from] serde_json::Error),
    /// The workload parsed but contains invalid processes.
    #[error(transparent)]
    Invalid(#[from] ScheduleError),
    /// More processes requested than there are process IDs.
    #[error("cannot generate {0} processes: IDs are limited to u32::MAX")]
    TooManyProcesses(usize),
}

/// Bounds for [`random_workload`].
const MAX_ARRIVAL: i64 = 20;
const MAX_PRIORITY: i32 = 5;
const MAX_BURST: i64 = 10;

/// The four-process sample set: (id, arrival, priority, burst).
pub fn sample_workload() -> Vec<Process> {
    vec![
        Process::new(1, 2, 3, 3),
        Process::new(2, 2, 2, 4),
        Process::new(3, 3, 1, 1),
        Process::new(4, 5, 3, 2),
    ]
}

/// Parses a JSON process array and validates it.
pub fn parse_workload(json: &str) -> Result<Vec<Process>, WorkloadError> {
    let processes: Vec<Process> = serde_json::from_str(json)?;
    validate_processes(&processes).map_err(ScheduleError::Invalid)?;
    Ok(processes)
}

/// Reads a JSON process array from a file and validates it.
pub fn load_workload(path: impl AsRef<Path>) -> Result<Vec<Process>, WorkloadError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let processes = parse_workload(&contents)?;
    debug!(path = %path.display(), processes = processes.len(), "workload loaded");
    Ok(processes)
}

/// Generates a reproducible random workload.
///
/// IDs run `1..=count`; arrival is drawn from `0..=20`, priority from
/// `1..=5` and burst from `1..=10`. The same seed always yields the same
/// workload. Fails when `count` exceeds the ID range.
pub fn random_workload(count: usize, seed: u64) -> Result<Vec<Process>, WorkloadError> {
    let last_id = u32::try_from(count).map_err(|_| WorkloadError::TooManyProcesses(count))?;
    let mut rng = StdRng::seed_from_u64(seed);
    let processes = (1..=last_id)
        .map(|id| {
            Process::new(
                id,
                rng.random_range(0..=MAX_ARRIVAL),
                rng.random_range(1..=MAX_PRIORITY),
                rng.random_range(1..=MAX_BURST),
            )
        })
        .collect();
    Ok(processes)
}
