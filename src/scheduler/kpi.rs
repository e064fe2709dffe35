//! Schedule quality metrics (KPIs).
//!
//! Computes standard CPU scheduling performance indicators from a
//! completed schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest finish time |
//! | Avg Turnaround | Mean of finish - arrival |
//! | Avg Wait | Mean of turnaround - burst |
//! | Avg Response | Mean of start - arrival |
//! | Utilization | Busy time / (makespan - earliest arrival) |
//! | Throughput | Processes / (makespan - earliest arrival) |
//! | Context Switches | Changes of running process between slices |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2:
//! Scheduling Criteria

use serde::Serialize;

use crate::models::{CompletedProcess, Schedule};

/// Schedule performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleKpi {
    /// Latest finish time.
    pub makespan: i64,
    /// Time the CPU spent executing processes.
    pub busy_time: i64,
    /// Time within the horizon with no process running.
    pub idle_time: i64,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean wait time.
    pub avg_wait: f64,
    /// Mean response time (first dispatch minus arrival).
    pub avg_response: f64,
    /// Longest wait of any single process.
    pub max_wait: i64,
    /// Busy fraction of the horizon (0.0..1.0).
    pub utilization: f64,
    /// Completed processes per time unit over the horizon.
    pub throughput: f64,
    /// Number of times the CPU switched from one process to another.
    pub context_switches: usize,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule.
    ///
    /// The horizon runs from the earliest arrival to the makespan. An empty
    /// schedule yields all-zero metrics.
    pub fn calculate(schedule: &Schedule) -> Self {
        let count = schedule.len();
        let horizon = schedule
            .earliest_arrival()
            .map(|first| schedule.makespan() - first)
            .unwrap_or(0);

        let mean = |total: f64| {
            if count == 0 {
                0.0
            } else {
                total / count as f64
            }
        };
        let per_horizon = |value: f64| {
            if horizon <= 0 {
                0.0
            } else {
                value / horizon as f64
            }
        };

        // Summed as f64: per-process times fit in i64, their totals may not
        let total = |metric: fn(&CompletedProcess) -> i64| -> f64 {
            schedule.completed.iter().map(|c| metric(c) as f64).sum()
        };
        let total_turnaround = total(|c| c.turnaround_time);
        let total_wait = total(|c| c.wait_time);
        let total_response = total(CompletedProcess::response_time);
        let busy_time = schedule.busy_time();

        let context_switches = schedule
            .slices
            .windows(2)
            .filter(|w| w[0].process_id != w[1].process_id)
            .count();

        Self {
            makespan: schedule.makespan(),
            busy_time,
            idle_time: schedule.idle_time(),
            avg_turnaround: mean(total_turnaround),
            avg_wait: mean(total_wait),
            avg_response: mean(total_response),
            max_wait: schedule
                .completed
                .iter()
                .map(|c| c.wait_time)
                .max()
                .unwrap_or(0),
            utilization: per_horizon(busy_time as f64),
            throughput: per_horizon(count as f64),
            context_switches,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use crate::scheduler::{CpuScheduler, FcfsScheduler, PriorityScheduler, SjnScheduler};
    use crate::workload::sample_workload;

    #[test]
    fn test_kpi_fcfs_sample() {
        let schedule = FcfsScheduler::new().schedule(&sample_workload()).unwrap();
        let kpi = ScheduleKpi::calculate(&schedule);

        assert_eq!(kpi.makespan, 12);
        assert_eq!(kpi.busy_time, 10);
        assert_eq!(kpi.idle_time, 0);
        // TAT 3+7+7+7 = 24, wait 0+3+6+5 = 14
        assert!((kpi.avg_turnaround - 6.0).abs() < 1e-10);
        assert!((kpi.avg_wait - 3.5).abs() < 1e-10);
        assert!((kpi.avg_response - 3.5).abs() < 1e-10);
        assert_eq!(kpi.max_wait, 6);
        assert!((kpi.utilization - 1.0).abs() < 1e-10);
        assert!((kpi.throughput - 0.4).abs() < 1e-10);
        assert_eq!(kpi.context_switches, 3);
    }

    #[test]
    fn test_kpi_sjn_beats_fcfs_on_wait() {
        let processes = sample_workload();
        let fcfs = ScheduleKpi::calculate(&FcfsScheduler::new().schedule(&processes).unwrap());
        let sjn = ScheduleKpi::calculate(&SjnScheduler::new().schedule(&processes).unwrap());

        // SJN wait 0+2+1+6 = 9
        assert!((sjn.avg_wait - 2.25).abs() < 1e-10);
        assert!(sjn.avg_wait < fcfs.avg_wait);
    }

    #[test]
    fn test_kpi_priority_counts_preemptions() {
        let schedule = PriorityScheduler::new().schedule(&sample_workload()).unwrap();
        let kpi = ScheduleKpi::calculate(&schedule);

        // 2 → 3 → 2 → 1 → 4
        assert_eq!(kpi.context_switches, 4);
        // Response: 2:0, 3:0, 1:5, 4:5
        assert!((kpi.avg_response - 2.5).abs() < 1e-10);
        // Wait and response differ for the preempted process only
        assert!((kpi.avg_wait - 2.75).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_idle_lowers_utilization() {
        let processes = vec![Process::new(1, 0, 1, 2), Process::new(2, 6, 1, 2)];
        let schedule = FcfsScheduler::new().schedule(&processes).unwrap();
        let kpi = ScheduleKpi::calculate(&schedule);

        assert_eq!(kpi.idle_time, 4);
        assert!((kpi.utilization - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_totals_near_time_limit() {
        // Turnarounds are B, 2B and 3B: each fits in i64, their sum does not
        let burst = i64::MAX / 4;
        let processes: Vec<Process> = (1..=3).map(|id| Process::new(id, 0, 1, burst)).collect();
        let schedule = FcfsScheduler::new().schedule(&processes).unwrap();
        let kpi = ScheduleKpi::calculate(&schedule);

        assert_eq!(kpi.makespan, 3 * burst);
        assert!((kpi.avg_turnaround - 2.0 * burst as f64).abs() / (burst as f64) < 1e-9);
        assert!((kpi.utilization - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = ScheduleKpi::calculate(&Schedule::new("empty"));
        assert_eq!(kpi.makespan, 0);
        assert_eq!(kpi.context_switches, 0);
        assert!((kpi.avg_wait - 0.0).abs() < 1e-10);
        assert!((kpi.utilization - 0.0).abs() < 1e-10);
    }
}
