// Club Simulator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/club-simulator day.txt
// ```
//
// Or with JSON output and run statistics:
//
// ```console
// $ ./target/release/club-simulator day.txt --format json --output day.json --summary
// ```

use anyhow::Context;
use clap::Parser;
use club_simulator::simulation::{LoggingConfig, SimulationError, SimulationLog, SimulationOrchestrator};
use club_simulator::types::config::{CliArgs, RunSettings};
use std::process;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first; usage errors exit through clap
    let args = CliArgs::parse();

    // Initialize logging based on CLI flags
    let mut logging = LoggingConfig::from_flags(args.verbose, args.debug);
    if let Some(dir) = &args.log_dir {
        logging = logging.with_file_logging(dir);
    }
    let _logging_guard = match logging.init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    info!("Starting Club Simulator");

    let settings = RunSettings::from_cli_args(args);
    let orchestrator = match SimulationOrchestrator::new(settings) {
        Ok(orchestrator) => orchestrator,
        Err(e) => {
            error!("Failed to initialize simulation: {}", e);
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    // Handle dry run mode
    if orchestrator.settings().dry_run {
        match orchestrator.load_input() {
            Ok(input) => {
                eprintln!("Input validation successful!");
                eprintln!("Dry run mode - simulation will not be executed.");
                eprintln!(
                    "  Tables: {}, working hours {}-{}, hourly rate {}, {} events",
                    input.config.table_count,
                    input.config.opening_time,
                    input.config.closing_time,
                    input.config.hourly_rate,
                    input.events.len()
                );
                return;
            }
            Err(e) => fail(e),
        }
    }

    let log = match orchestrator.run() {
        Ok(log) => log,
        Err(e) => fail(e),
    };

    if let Err(e) = write_output(&orchestrator, &log) {
        error!("{:#}", e);
        eprintln!("{:#}", e);
        process::exit(1);
    }

    if orchestrator.settings().summary {
        eprintln!("{}", log.statistics.summary());
    }

    info!("Club Simulator completed successfully: {}", log.statistics);
}

/// Write the log, adding the destination to any error
fn write_output(orchestrator: &SimulationOrchestrator, log: &SimulationLog) -> anyhow::Result<()> {
    let destination = match &orchestrator.settings().output {
        Some(path) => path.display().to_string(),
        None => "stdout".to_string(),
    };
    orchestrator
        .write_output(log)
        .with_context(|| format!("Failed to write simulation log to {}", destination))
}

/// Report a fatal error and exit
///
/// Malformed input is reported by echoing the offending line on stdout.
fn fail(e: SimulationError) -> ! {
    error!("{} error: {}", e.category(), e);
    match e.offending_line() {
        Some(line) => println!("{}", line),
        None => eprintln!("{}", e),
    }
    process::exit(1);
}
