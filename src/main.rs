//! Command-line driver: builds a workload, runs the selected engines on
//! independent copies of it and prints each result.

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use u_cpusched::models::{Process, Schedule};
use u_cpusched::report::{render_json, render_report, ReportOptions};
use u_cpusched::scheduler::{Algorithm, CpuScheduler, PriorityScheduler, DEFAULT_QUANTUM};
use u_cpusched::workload::{load_workload, random_workload, sample_workload};

/// CPU scheduling simulator (FCFS, SJN, preemptive priority).
#[derive(Debug, Parser)]
#[command(name = "u-cpusched", version, about)]
struct Cli {
    /// JSON workload file (array of {id, arrival_time, priority, burst_time}).
    #[arg(long, conflicts_with = "random")]
    input: Option<PathBuf>,

    /// Generate a random workload with this many processes.
    #[arg(long)]
    random: Option<usize>,

    /// Seed for --random.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Algorithms to run, in order (fcfs, sjn, priority). Default: all three.
    #[arg(short, long = "algorithm", value_delimiter = ',')]
    algorithms: Vec<Algorithm>,

    /// Time quantum of the priority engine.
    #[arg(short, long, default_value_t = DEFAULT_QUANTUM)]
    quantum: i64,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Print KPI summaries after each table.
    #[arg(long)]
    stats: bool,

    /// Print the execution timeline after each table.
    #[arg(long)]
    timeline: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn build_workload(cli: &Cli) -> Result<Vec<Process>, Box<dyn Error>> {
    let processes = match (&cli.input, cli.random) {
        (Some(path), _) => load_workload(path)?,
        (None, Some(count)) => random_workload(count, cli.seed)?,
        (None, None) => sample_workload(),
    };
    Ok(processes)
}

fn engine_for(algorithm: Algorithm, quantum: i64) -> Box<dyn CpuScheduler> {
    match algorithm {
        Algorithm::Priority => Box::new(PriorityScheduler::new().with_quantum(quantum)),
        other => other.scheduler(),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let cli = Cli::parse();
    debug!(?cli, "parsed arguments");

    let processes = build_workload(&cli)?;
    info!(processes = processes.len(), "workload ready");

    let algorithms = if cli.algorithms.is_empty() {
        Algorithm::ALL.to_vec()
    } else {
        cli.algorithms.clone()
    };

    // Each engine clones the input; `processes` stays pristine between runs.
    let schedules = algorithms
        .iter()
        .map(|&algorithm| engine_for(algorithm, cli.quantum).schedule(&processes))
        .collect::<Result<Vec<Schedule>, _>>()?;

    match cli.format {
        Format::Table => {
            let options = ReportOptions {
                kpi: cli.stats,
                timeline: cli.timeline,
            };
            for schedule in &schedules {
                print!("{}", render_report(schedule, options));
            }
        }
        Format::Json => println!("{}", render_json(&schedules)?),
    }
    Ok(())
}
