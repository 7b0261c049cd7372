//! Individual CSV record parsing for weather files
//!
//! This module converts one CSV row into either a [`WeatherRecord`] or the
//! [`Diagnostic`] explaining why the row was dropped, never both.

use csv::StringRecord;

use super::column_mapping::ColumnMapping;
use super::field_parsers::{get_required_field, parse_date, parse_measurement};
use crate::Error;
use crate::app::models::{Diagnostic, WeatherRecord};
use crate::constants::{DATE_COLUMN, HUMIDITY_COLUMN, PRECIPITATION_COLUMN, TEMPERATURE_COLUMN};

/// Parse a single weather record from CSV data
///
/// An unparseable date yields a warning diagnostic and stops before the
/// numeric fields are looked at. A missing field or a non-numeric measurement
/// yields an error diagnostic. In every failure case the row is dropped.
pub fn parse_weather_record(
    record: &StringRecord,
    mapping: &ColumnMapping,
    row_number: usize,
) -> std::result::Result<WeatherRecord, Diagnostic> {
    let raw_date = get_required_field(record, mapping, DATE_COLUMN)
        .map_err(|cause| row_error(row_number, cause))?;

    let date = parse_date(raw_date).ok_or_else(|| {
        Diagnostic::warning(
            row_number,
            format!("Invalid date format in row {}: {}", row_number, raw_date),
        )
    })?;

    let temperature = parse_numeric_field(record, mapping, TEMPERATURE_COLUMN, row_number)?;
    let humidity = parse_numeric_field(record, mapping, HUMIDITY_COLUMN, row_number)?;
    let precipitation = parse_numeric_field(record, mapping, PRECIPITATION_COLUMN, row_number)?;

    Ok(WeatherRecord::new(date, temperature, humidity, precipitation))
}

fn parse_numeric_field(
    record: &StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
    row_number: usize,
) -> std::result::Result<f64, Diagnostic> {
    get_required_field(record, mapping, field_name)
        .and_then(|value| parse_measurement(field_name, value))
        .map_err(|cause| row_error(row_number, cause))
}

fn row_error(row_number: usize, cause: String) -> Diagnostic {
    Diagnostic::error(row_number, Error::row_format(row_number, cause).to_string())
}
