//! Weather Summary Library
//!
//! A Rust library for validating daily weather observations stored as CSV and
//! summarising them into aggregate statistics and extreme-event listings.
//!
//! This library provides tools for:
//! - Parsing weather CSV files with case-insensitive column discovery
//! - Per-row validation that reports diagnostics instead of aborting the run
//! - Single-pass aggregation into averages and hot/cold/humid/rainy day lists
//! - Writing a flat `Metric,Value` summary table and a narrative text report

pub mod config;
pub mod constants;
pub mod processor;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregator;
        pub mod report_writer;
        pub mod weather_csv_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Diagnostic, ExtremeEvent, Severity, Statistics, WeatherRecord};
pub use config::AnalysisConfig;
pub use processor::{ProcessRequest, ProcessingOutcome, WeatherProcessor};

/// Result type alias for weather summary operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for weather summary operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Input could not be read or output could not be written
    #[error("File access error for '{path}': {message}")]
    FileAccess {
        path: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// CSV reading or writing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Header lacks one or more required columns
    #[error("Missing required columns: {}", .missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    /// A single data row could not be turned into a record
    #[error("Error processing row {row}: {message}")]
    RowFormat { row: usize, message: String },

    /// No row survived validation
    #[error("No valid data rows found after validation")]
    EmptyDataset,

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create a file access error with context
    pub fn file_access(
        path: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Self::FileAccess {
            path: path.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a missing columns error
    pub fn missing_columns(missing: Vec<String>) -> Self {
        Self::MissingColumns { missing }
    }

    /// Create a row format error
    pub fn row_format(row: usize, message: impl Into<String>) -> Self {
        Self::RowFormat {
            row,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
