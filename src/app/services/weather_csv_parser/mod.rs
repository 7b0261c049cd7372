//! Weather CSV parser and dataset validator
//!
//! This module turns a CSV file of daily weather observations into validated
//! [`WeatherRecord`](crate::app::models::WeatherRecord)s plus an ordered list of
//! row-level diagnostics. Only a header that lacks a required column is fatal;
//! every other problem is reported against its row and processing continues.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - File handling and the per-row validation loop
//! - [`column_mapping`] - Case-insensitive discovery of the required columns
//! - [`record_parser`] - Conversion of one CSV row into a record or a diagnostic
//! - [`field_parsers`] - Date and number parsing helpers
//! - [`range_checks`] - Plausibility warnings for parsed records
//! - [`stats`] - Validation counters and result structures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use weather_summary::app::services::weather_csv_parser::WeatherCsvParser;
//! use weather_summary::config::PlausibilityLimits;
//!
//! # fn example() -> weather_summary::Result<()> {
//! let parser = WeatherCsvParser::new(PlausibilityLimits::default());
//! let result = parser.parse_file(std::path::Path::new("weather.csv"))?;
//!
//! println!("Kept {} of {} rows",
//!          result.stats.valid_rows,
//!          result.stats.total_rows);
//! # Ok(())
//! # }
//! ```

pub mod column_mapping;
pub mod field_parsers;
pub mod parser;
pub mod range_checks;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::ColumnMapping;
pub use parser::WeatherCsvParser;
pub use record_parser::parse_weather_record;
pub use stats::{ValidationResult, ValidationStats};
