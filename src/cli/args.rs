//! Command-line argument definitions for the weather summary tool
//!
//! This module defines the CLI interface using the clap derive API.

use crate::constants::DEFAULT_OUTPUT_BASE;
use crate::processor::ProcessRequest;
use crate::{Error, Result};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the weather summary tool
///
/// Validates a CSV of daily weather observations, then writes summary
/// statistics and, optionally, a narrative report.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "weather-summary",
    version,
    about = "Summarise daily weather CSV data into statistics and extreme-event reports",
    long_about = "Reads a CSV file with date, temperature, humidity and precipitation columns \
                  (any order, case-insensitive), drops rows that cannot be parsed, flags \
                  implausible values, and writes a Metric,Value summary table. With --report \
                  a narrative text report is written as well."
)]
pub struct Args {
    /// Input CSV file with daily weather records
    #[arg(value_name = "INPUT", help = "Input CSV file with daily weather records")]
    pub input: PathBuf,

    /// Base name for output files
    ///
    /// Outputs are written to <BASE>_summary.csv and, with --report,
    /// <BASE>_report.txt. Parent directories must already exist.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "BASE",
        default_value = DEFAULT_OUTPUT_BASE,
        help = "Base name for output files"
    )]
    pub output_base: String,

    /// Also write the narrative text report
    #[arg(short = 'r', long = "report", help = "Also write a narrative text report")]
    pub report: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(short = 'q', long = "quiet", help = "Only show errors")]
    pub quiet: bool,
}

impl Args {
    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.output_base.trim().is_empty() {
            return Err(Error::configuration(
                "Output base name must not be empty".to_string(),
            ));
        }

        if self.input.is_dir() {
            return Err(Error::configuration(format!(
                "Input path is a directory, expected a CSV file: {}",
                self.input.display()
            )));
        }

        Ok(())
    }

    /// Get the log level string from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should print the run summary (not in quiet mode)
    pub fn show_summary(&self) -> bool {
        !self.quiet
    }

    /// Build the processing request for these arguments
    pub fn to_request(&self) -> ProcessRequest {
        ProcessRequest {
            input: self.input.clone(),
            output_base: self.output_base.clone(),
            write_report: self.report,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(args.iter().copied()).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["weather-summary", "data.csv"]);

        assert_eq!(args.input, PathBuf::from("data.csv"));
        assert_eq!(args.output_base, "weather_output");
        assert!(!args.report);
        assert_eq!(args.get_log_level(), "warn");
        assert!(args.show_summary());
    }

    #[test]
    fn test_all_flags() {
        let args = parse(&["weather-summary", "data.csv", "-o", "out/run", "--report", "-vv"]);

        assert_eq!(args.output_base, "out/run");
        assert!(args.report);
        assert_eq!(args.get_log_level(), "debug");

        let request = args.to_request();
        assert_eq!(request.input, PathBuf::from("data.csv"));
        assert_eq!(request.output_base, "out/run");
        assert!(request.write_report);
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args = parse(&["weather-summary", "data.csv", "-vvv", "--quiet"]);

        assert_eq!(args.get_log_level(), "error");
        assert!(!args.show_summary());
    }

    #[test]
    fn test_input_is_required() {
        assert!(Args::try_parse_from(["weather-summary"]).is_err());
    }

    #[test]
    fn test_validate_rejects_blank_base() {
        let args = parse(&["weather-summary", "data.csv", "--output", "  "]);

        assert!(matches!(
            args.validate(),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_directory_input() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().display().to_string();
        let args = parse(&["weather-summary", path.as_str()]);

        assert!(args.validate().is_err());
    }
}
