//! End-to-end processing of one weather CSV file.
//!
//! Runs the linear pipeline parse → validate → aggregate → render and reports
//! which files were written. Aggregation happens before any output is opened,
//! so an input without valid rows leaves the filesystem untouched.

use chrono::Local;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::app::models::{Diagnostic, Statistics};
use crate::app::services::aggregator::aggregate;
use crate::app::services::report_writer::{render_report, write_report_file, write_summary_file};
use crate::app::services::weather_csv_parser::{ValidationStats, WeatherCsvParser};
use crate::config::AnalysisConfig;
use crate::constants::{REPORT_SUFFIX, SUMMARY_SUFFIX};
use crate::{Error, Result};

/// Output file locations derived from a base name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub summary: PathBuf,
    pub report: PathBuf,
}

impl OutputPaths {
    /// `<base>_summary.csv` and `<base>_report.txt`
    pub fn from_base(base: &str) -> Self {
        Self {
            summary: PathBuf::from(format!("{}{}", base, SUMMARY_SUFFIX)),
            report: PathBuf::from(format!("{}{}", base, REPORT_SUFFIX)),
        }
    }
}

/// One processing run
#[derive(Debug, Clone)]
pub struct ProcessRequest {
    /// Weather CSV to analyse
    pub input: PathBuf,
    /// Base name used to derive output paths
    pub output_base: String,
    /// Also write the narrative report
    pub write_report: bool,
}

/// Result of a successful run
#[derive(Debug, Clone)]
pub struct ProcessingOutcome {
    pub statistics: Statistics,
    pub validation: ValidationStats,
    pub diagnostics: Vec<Diagnostic>,
    pub summary_path: PathBuf,
    pub report_path: Option<PathBuf>,
}

impl ProcessingOutcome {
    /// Paths of every file written during the run
    pub fn written_files(&self) -> Vec<&Path> {
        let mut files = vec![self.summary_path.as_path()];
        if let Some(report) = &self.report_path {
            files.push(report.as_path());
        }
        files
    }
}

/// Weather file processor
#[derive(Debug, Clone)]
pub struct WeatherProcessor {
    config: AnalysisConfig,
    parser: WeatherCsvParser,
}

impl WeatherProcessor {
    /// Create a processor after validating its configuration
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        let parser = WeatherCsvParser::new(config.plausibility.clone());
        Ok(Self { config, parser })
    }

    /// Process a single input file and write its outputs
    pub fn process(&self, request: &ProcessRequest) -> Result<ProcessingOutcome> {
        if request.output_base.trim().is_empty() {
            return Err(Error::configuration("Output base name must not be empty"));
        }

        let validation = self.parser.parse_file(&request.input)?;
        if validation.records.is_empty() {
            warn!(
                "No valid records in {} ({} rows read)",
                request.input.display(),
                validation.stats.total_rows
            );
        }

        let statistics = aggregate(&validation.records, &self.config.extremes)?;

        let paths = OutputPaths::from_base(&request.output_base);
        write_summary_file(&paths.summary, &statistics, &self.config.extremes)?;

        let report_path = if request.write_report {
            let report = render_report(
                &statistics,
                &request.input.display().to_string(),
                Local::now().naive_local(),
                &self.config.extremes,
                &self.config.narrative,
            );
            write_report_file(&paths.report, &report)?;
            Some(paths.report)
        } else {
            None
        };

        info!(
            "Processed {}: {} data points",
            request.input.display(),
            statistics.data_points
        );

        Ok(ProcessingOutcome {
            statistics,
            validation: validation.stats,
            diagnostics: validation.diagnostics,
            summary_path: paths.summary,
            report_path,
        })
    }
}
