//! Command implementations for the weather summary CLI
//!
//! This module contains the main command execution logic, logging setup,
//! and the console run summary.

use crate::cli::args::Args;
use crate::config::AnalysisConfig;
use crate::processor::{ProcessingOutcome, WeatherProcessor};
use crate::Result;
use colored::*;
use std::time::Instant;
use tracing::{debug, info};

/// Main command runner for the weather summary tool
///
/// This function orchestrates the workflow:
/// 1. Set up logging
/// 2. Validate arguments
/// 3. Run the processing pipeline
/// 4. Print a run summary
pub fn run(args: Args) -> Result<ProcessingOutcome> {
    let start_time = Instant::now();

    setup_logging(&args);

    info!("Starting weather summary");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let processor = WeatherProcessor::new(AnalysisConfig::default())?;
    let outcome = processor.process(&args.to_request())?;

    info!("Completed in {:.2?}", start_time.elapsed());

    if args.show_summary() {
        print_run_summary(&outcome);
    }

    Ok(outcome)
}

/// Set up structured logging to stderr
///
/// `RUST_LOG` takes precedence over the verbosity flags.
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("weather_summary={}", log_level)));

    // try_init so repeated calls (e.g. from tests) do not panic
    let result = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if result.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }
}

/// Print a short, colored summary of the run to stdout
fn print_run_summary(outcome: &ProcessingOutcome) {
    let validation = &outcome.validation;
    let stats = &outcome.statistics;

    println!();
    println!("{}", "Weather summary complete".bright_green().bold());
    println!(
        "  Rows read:        {}",
        validation.total_rows.to_string().bright_white()
    );
    println!(
        "  Valid records:    {}",
        validation.valid_rows.to_string().bright_green()
    );
    println!(
        "  Warnings:         {}",
        if validation.warnings > 0 {
            validation.warnings.to_string().bright_yellow()
        } else {
            validation.warnings.to_string().normal()
        }
    );
    println!(
        "  Errors:           {}",
        if validation.errors > 0 {
            validation.errors.to_string().bright_red()
        } else {
            validation.errors.to_string().normal()
        }
    );
    println!(
        "  Averages:         {:.2}°C, {:.2}%, {:.2}mm",
        stats.avg_temperature, stats.avg_humidity, stats.avg_precipitation
    );
    println!(
        "  Extreme events:   {}",
        stats.extreme_event_count().to_string().bright_cyan()
    );
    for path in outcome.written_files() {
        println!("  Wrote {}", path.display().to_string().bright_cyan());
    }
}
