//! Core weather CSV parser implementation
//!
//! This module provides the main parser orchestration: opening the input,
//! mapping the header, and driving the record parser over every data row.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, error, info, warn};

use super::column_mapping::ColumnMapping;
use super::range_checks::check_plausibility;
use super::record_parser::parse_weather_record;
use super::stats::{ValidationResult, ValidationStats};
use crate::app::models::{Diagnostic, Severity};
use crate::config::PlausibilityLimits;
use crate::constants::FIRST_DATA_ROW;
use crate::{Error, Result};

/// Weather CSV parser and dataset validator
///
/// The parser keeps going after bad rows:
/// - Unparseable dates and fields drop the row with a diagnostic
/// - Implausible values keep the row with a warning
/// - Only a header missing a required column, or an I/O failure, is fatal
#[derive(Debug, Clone, Default)]
pub struct WeatherCsvParser {
    limits: PlausibilityLimits,
}

impl WeatherCsvParser {
    /// Create a new parser with the given plausibility limits
    pub fn new(limits: PlausibilityLimits) -> Self {
        Self { limits }
    }

    /// Parse a weather CSV file and return validated records with diagnostics
    pub fn parse_file(&self, file_path: &Path) -> Result<ValidationResult> {
        info!("Parsing weather CSV file: {}", file_path.display());

        let file = File::open(file_path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                Error::file_not_found(file_path.display().to_string())
            } else {
                Error::file_access(
                    file_path.display().to_string(),
                    "Failed to open input file",
                    e,
                )
            }
        })?;

        self.parse_reader(file, &file_path.display().to_string())
    }

    /// Parse weather CSV content from any reader
    ///
    /// `source_name` is only used to label errors.
    pub fn parse_reader<R: Read>(&self, reader: R, source_name: &str) -> Result<ValidationResult> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| read_failure(source_name, "Failed to read CSV headers", e))?
            .clone();

        let column_mapping = ColumnMapping::analyze(&headers)?;
        debug!(
            "Column mapping: {} total, {} ignored",
            column_mapping.total_columns,
            column_mapping.extra_columns()
        );

        let mut stats = ValidationStats::new();
        let mut records = Vec::new();
        let mut diagnostics = Vec::new();

        for (index, result) in csv_reader.records().enumerate() {
            let row_number = FIRST_DATA_ROW + index;
            stats.total_rows += 1;

            let record = match result {
                Ok(record) => record,
                Err(e) if e.is_io_error() => {
                    return Err(read_failure(source_name, "Failed to read CSV data", e));
                }
                Err(e) => {
                    let diagnostic = Diagnostic::error(
                        row_number,
                        Error::row_format(row_number, e.to_string()).to_string(),
                    );
                    stats.dropped_rows += 1;
                    emit(diagnostic, &mut stats, &mut diagnostics);
                    continue;
                }
            };

            match parse_weather_record(&record, &column_mapping, row_number) {
                Ok(weather_record) => {
                    for warning in check_plausibility(&weather_record, &self.limits, row_number) {
                        emit(warning, &mut stats, &mut diagnostics);
                    }
                    records.push(weather_record);
                    stats.valid_rows += 1;
                }
                Err(diagnostic) => {
                    stats.dropped_rows += 1;
                    emit(diagnostic, &mut stats, &mut diagnostics);
                }
            }
        }

        info!("{}", stats.summary());

        Ok(ValidationResult {
            records,
            diagnostics,
            stats,
        })
    }
}

/// Log a diagnostic as soon as it is produced, then keep it for the result
fn emit(diagnostic: Diagnostic, stats: &mut ValidationStats, diagnostics: &mut Vec<Diagnostic>) {
    match diagnostic.severity {
        Severity::Warning => warn!("{}", diagnostic.message),
        Severity::Error => error!("{}", diagnostic.message),
    }
    stats.record_diagnostic(&diagnostic);
    diagnostics.push(diagnostic);
}

fn read_failure(source_name: &str, message: &str, error: csv::Error) -> Error {
    if error.is_io_error() {
        if let csv::ErrorKind::Io(io_error) = error.into_kind() {
            return Error::file_access(source_name, message, io_error);
        }
        return Error::csv_parsing(source_name, message, None);
    }
    Error::csv_parsing(source_name, message, Some(error))
}
