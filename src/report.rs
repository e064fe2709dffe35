//! Text and JSON rendering of schedules.
//!
//! The table layout is one header row of labels followed by one row per
//! process, sorted by ID, every cell left-aligned in a fixed-width column,
//! and a trailing blank line. Rendering never modifies the schedule.

use std::fmt::Write as _;

use serde::Serialize;

use crate::models::{CompletedProcess, Schedule};
use crate::scheduler::ScheduleKpi;

/// Width of every table column.
pub const COLUMN_WIDTH: usize = 20;

/// A table column: header label and cell accessor.
#[derive(Clone, Copy)]
pub struct Column {
    /// Header label.
    pub label: &'static str,
    /// Cell value for a row.
    pub value: fn(&CompletedProcess) -> i64,
}

/// The table columns, in display order.
pub fn columns() -> [Column; 8] {
    [
        Column {
            label: "pID:",
            value: |c| i64::from(c.process.id),
        },
        Column {
            label: "Arrival Time",
            value: |c| c.process.arrival_time,
        },
        Column {
            label: "Priority",
            value: |c| i64::from(c.process.priority),
        },
        Column {
            label: "Burst Time",
            value: |c| c.process.burst_time,
        },
        Column {
            label: "Start Time",
            value: |c| c.start_time,
        },
        Column {
            label: "Finish Time",
            value: |c| c.finish_time,
        },
        Column {
            label: "TAT",
            value: |c| c.turnaround_time,
        },
        Column {
            label: "Wait Time",
            value: |c| c.wait_time,
        },
    ]
}

/// What to print besides the table.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Append the KPI summary.
    pub kpi: bool,
    /// Append the execution timeline.
    pub timeline: bool,
}

/// Renders the process table of a schedule.
pub fn render_table(schedule: &Schedule) -> String {
    let columns = columns();
    let mut out = String::new();

    for column in &columns {
        let _ = write!(out, "{:<width$}", column.label, width = COLUMN_WIDTH);
    }
    out.push('\n');

    for row in schedule.by_id() {
        for column in &columns {
            let _ = write!(out, "{:<width$}", (column.value)(&row), width = COLUMN_WIDTH);
        }
        out.push('\n');
    }
    out.push('\n');
    out
}

/// Renders the KPI summary block.
pub fn render_kpi(kpi: &ScheduleKpi) -> String {
    format!(
        "Average TAT: {:.2}  Average Wait: {:.2}  Average Response: {:.2}  Max Wait: {}\n\
         Makespan: {}  Utilization: {:.1}%  Throughput: {:.3}/unit  Context Switches: {}\n\n",
        kpi.avg_turnaround,
        kpi.avg_wait,
        kpi.avg_response,
        kpi.max_wait,
        kpi.makespan,
        kpi.utilization * 100.0,
        kpi.throughput,
        kpi.context_switches,
    )
}

/// Renders the CPU timeline, one line per slice, with idle gaps.
pub fn render_timeline(schedule: &Schedule) -> String {
    let mut out = String::from("Timeline\n");
    let mut cursor = 0;

    for slice in &schedule.slices {
        if slice.start > cursor {
            let _ = writeln!(out, "  [{:>4}, {:>4})  idle", cursor, slice.start);
        }
        let _ = writeln!(
            out,
            "  [{:>4}, {:>4})  P{}",
            slice.start, slice.end, slice.process_id
        );
        cursor = slice.end;
    }
    out.push('\n');
    out
}

/// Renders a full report: heading, table and the optional extras.
pub fn render_report(schedule: &Schedule, options: ReportOptions) -> String {
    let mut out = format!("{}\n", schedule.algorithm);
    out.push_str(&render_table(schedule));
    if options.kpi {
        out.push_str(&render_kpi(&ScheduleKpi::calculate(schedule)));
    }
    if options.timeline {
        out.push_str(&render_timeline(schedule));
    }
    out
}

#[derive(Serialize)]
struct ScheduleReport<'a> {
    #[serde(flatten)]
    schedule: &'a Schedule,
    kpi: ScheduleKpi,
}

/// Renders schedules with their KPIs as a pretty-printed JSON array.
///
/// Each schedule's `completed` rows are emitted in ID order.
pub fn render_json(schedules: &[Schedule]) -> Result<String, serde_json::Error> {
    let sorted: Vec<Schedule> = schedules
        .iter()
        .map(|s| Schedule {
            completed: s.by_id(),
            ..s.clone()
        })
        .collect();
    let reports: Vec<ScheduleReport<'_>> = sorted
        .iter()
        .map(|schedule| ScheduleReport {
            schedule,
            kpi: ScheduleKpi::calculate(schedule),
        })
        .collect();
    serde_json::to_string_pretty(&reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use crate::scheduler::{CpuScheduler, FcfsScheduler, PriorityScheduler, SjnScheduler};
    use crate::workload::sample_workload;

    fn row(cells: &[&str]) -> String {
        cells
            .iter()
            .map(|c| format!("{c:<20}"))
            .collect::<String>()
    }

    #[test]
    fn test_table_layout() {
        let schedule = FcfsScheduler::new().schedule(&sample_workload()).unwrap();
        let table = render_table(&schedule);
        let lines: Vec<&str> = table.split('\n').collect();

        assert_eq!(
            lines[0],
            row(&[
                "pID:",
                "Arrival Time",
                "Priority",
                "Burst Time",
                "Start Time",
                "Finish Time",
                "TAT",
                "Wait Time"
            ])
        );
        assert_eq!(lines[1], row(&["1", "2", "3", "3", "2", "5", "3", "0"]));
        assert_eq!(lines[4], row(&["4", "5", "3", "2", "10", "12", "7", "5"]));
        // Header + 4 rows + blank line, then the final newline
        assert_eq!(lines.len(), 7);
        assert!(table.ends_with("\n\n"));
    }

    #[test]
    fn test_table_sorted_by_id() {
        // Priority completes in order 3, 2, 1, 4
        let schedule = PriorityScheduler::new().schedule(&sample_workload()).unwrap();
        let table = render_table(&schedule);
        let ids: Vec<&str> = table
            .lines()
            .skip(1)
            .filter(|l| !l.is_empty())
            .map(|l| l.split_whitespace().next().unwrap())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
        // The schedule itself keeps completion order
        assert_eq!(schedule.completion_order(), vec![3, 2, 1, 4]);
    }

    #[test]
    fn test_empty_table() {
        let table = render_table(&Schedule::new("empty"));
        assert_eq!(table.lines().count(), 2);
    }

    #[test]
    fn test_report_heading_and_extras() {
        let schedule = SjnScheduler::new().schedule(&sample_workload()).unwrap();

        let plain = render_report(&schedule, ReportOptions::default());
        assert!(plain.starts_with("Shortest Job Next\npID:"));
        assert!(!plain.contains("Average TAT"));

        let full = render_report(
            &schedule,
            ReportOptions {
                kpi: true,
                timeline: true,
            },
        );
        assert!(full.contains("Average Wait: 2.25"));
        assert!(full.contains("Timeline\n"));
    }

    #[test]
    fn test_timeline_marks_idle() {
        let processes = vec![Process::new(1, 2, 1, 2), Process::new(2, 6, 1, 1)];
        let schedule = FcfsScheduler::new().schedule(&processes).unwrap();
        let timeline = render_timeline(&schedule);

        assert_eq!(
            timeline,
            "Timeline\n\
             \x20 [   0,    2)  idle\n\
             \x20 [   2,    4)  P1\n\
             \x20 [   4,    6)  idle\n\
             \x20 [   6,    7)  P2\n\n"
        );
    }

    #[test]
    fn test_json_output() {
        let processes = sample_workload();
        let schedules = vec![
            FcfsScheduler::new().schedule(&processes).unwrap(),
            PriorityScheduler::new().schedule(&processes).unwrap(),
        ];
        let json = render_json(&schedules).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["algorithm"], "First Come First Serve");
        assert_eq!(value[1]["completed"][0]["id"], 1);
        assert_eq!(value[1]["completed"][0]["finish_time"], 10);
        assert_eq!(value[1]["kpi"]["context_switches"], 4);
    }
}
