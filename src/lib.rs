//! CPU process scheduling simulator.
//!
//! Simulates a single CPU under three disciplines and derives per-process
//! timing metrics (start, finish, turnaround, wait).
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `CompletedProcess`, `Schedule`,
//!   `ExecutionSlice`
//! - **`validation`**: Input integrity checks (burst/arrival bounds, duplicate IDs)
//! - **`dispatching`**: Selection rules and the rule engine that picks the
//!   next process
//! - **`scheduler`**: FCFS, SJN and preemptive priority engines, plus KPIs
//! - **`report`**: Table, timeline and JSON rendering
//! - **`workload`**: Sample, JSON-file and seeded random workloads
//!
//! # Example
//!
//! ```
//! use u_cpusched::scheduler::{Algorithm, CpuScheduler};
//! use u_cpusched::workload::sample_workload;
//!
//! let processes = sample_workload();
//! for algorithm in Algorithm::ALL {
//!     let schedule = algorithm.scheduler().schedule(&processes).unwrap();
//!     assert_eq!(schedule.len(), processes.len());
//!     assert_eq!(schedule.makespan(), 12);
//! }
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod dispatching;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;
