//! Test utilities for weather CSV parser testing
//!
//! This module provides fixtures and helper functions shared by the parser
//! test modules.

use csv::StringRecord;
use std::io::Write;
use tempfile::NamedTempFile;

use super::ColumnMapping;

// Test modules
mod column_mapping_tests;
mod record_parser_tests;

/// Standard header used by most fixtures
pub const STANDARD_HEADER: &str = "date,temperature,humidity,precipitation";

/// Rows mixing extremes with one non-numeric temperature
pub fn create_mixed_weather_csv() -> String {
    r#"date,temperature,humidity,precipitation
2024-01-01,35,50,10
2024-01-02,-5,95,30
2024-01-03,abc,50,10"#
        .to_string()
}

/// Build a header record from a comma-separated list
pub fn header_record(header: &str) -> StringRecord {
    StringRecord::from(header.split(',').collect::<Vec<_>>())
}

/// Build a data record from a list of cells
pub fn data_record(cells: &[&str]) -> StringRecord {
    StringRecord::from(cells.to_vec())
}

/// Column mapping for the standard header
pub fn standard_mapping() -> ColumnMapping {
    ColumnMapping::analyze(&header_record(STANDARD_HEADER)).unwrap()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "{}", content).unwrap();
    temp_file
}
