//! Kafka Reassignment Planner CLI
//!
//! Reads a partition assignment document and writes the three plans that
//! move replicas from one broker to another without an unclean leader
//! election.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use kafka_reassign_core::config::{LoggingConfig, OutputMode, PlannerConfig};
use kafka_reassign_core::error::ConfigError;
use kafka_reassign_core::output::{ConsoleSink, FileSink, PlanSink, SinkReport};
use kafka_reassign_core::{BrokerId, PartitionAssignment, ReassignmentPlanner};

/// Plan a zero-downtime replica move between two Kafka brokers.
#[derive(Parser, Debug)]
#[command(name = "kafka-reassign")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input partition assignment file.
    #[arg(short, long)]
    file: PathBuf,

    /// Broker ID to move replicas away from.
    #[arg(long, allow_negative_numbers = true)]
    from: BrokerId,

    /// Broker ID to move replicas to.
    #[arg(long, allow_negative_numbers = true)]
    to: BrokerId,

    /// Print all three plans to stdout instead of writing files.
    #[arg(long)]
    stdout: bool,

    /// Path to an optional configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Reject argument combinations that can never produce a plan.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.from == self.to {
            return Err(ConfigError::SameNode { node: self.from });
        }
        Ok(())
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    setup_tracing(&log_config(&args, &config));

    match run(&args, &config, io::stdout().lock()) {
        Ok(report) if report.is_success() => ExitCode::SUCCESS,
        Ok(report) => {
            for failure in &report.failures {
                eprintln!("Error: {failure}");
            }
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Validate arguments and build the effective configuration.
fn load_config(args: &Args) -> anyhow::Result<PlannerConfig> {
    args.validate()?;

    let mut config = match &args.config {
        Some(path) => PlannerConfig::from_file(path)?,
        None => PlannerConfig::default(),
    };

    // Apply CLI overrides
    if args.stdout {
        config.output.mode = OutputMode::Console;
    }

    Ok(config)
}

/// Logging configuration with the verbosity flag applied.
fn log_config(args: &Args, config: &PlannerConfig) -> LoggingConfig {
    match args.verbose {
        0 => config.logging.clone(),
        1 => LoggingConfig {
            level: "debug".to_string(),
            ..config.logging.clone()
        },
        _ => LoggingConfig {
            level: "trace".to_string(),
            ..config.logging.clone()
        },
    }
}

/// Load the assignment, plan the move and emit it. Plan text (console mode)
/// or `Saved:` lines (file mode) go to `out`.
fn run<W: Write>(args: &Args, config: &PlannerConfig, out: W) -> anyhow::Result<SinkReport> {
    let planner = ReassignmentPlanner::new(args.from, args.to);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        file = %args.file.display(),
        from = planner.from(),
        to = planner.to(),
        mode = ?config.output.mode,
        "planning replica move"
    );

    let assignment = PartitionAssignment::from_file(&args.file)?;

    if !assignment.brokers().contains(&planner.from()) {
        warn!(from = planner.from(), "source broker holds no replicas in this assignment");
    }

    let plan = planner.plan(&assignment);

    let report = match config.output.mode {
        OutputMode::Console => ConsoleSink::new(out, &config.output.indent).emit(&plan),
        OutputMode::Files => FileSink::new(&args.file, &config.output, out).emit(&plan),
    };

    Ok(report)
}

fn setup_tracing(config: &LoggingConfig) {
    let level = match config.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let subscriber = tracing_subscriber::registry().with(filter);

    // Plans go to stdout, so logs stay on stderr.
    if config.json {
        subscriber
            .with(fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        subscriber.with(fmt::layer().with_writer(io::stderr)).init();
    }
}
