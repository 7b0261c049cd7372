//! Field parsing utilities for weather CSV records
//!
//! This module provides helper functions for extracting and converting
//! individual fields from CSV records.

use super::column_mapping::ColumnMapping;
use crate::constants::DATE_FORMAT;
use chrono::NaiveDate;
use csv::StringRecord;

/// Get a field value, treating an absent or blank cell as missing
pub fn get_required_field<'a>(
    record: &'a StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
) -> std::result::Result<&'a str, String> {
    let index = mapping
        .get_index(field_name)
        .ok_or_else(|| format!("required column '{}' not found", field_name))?;

    let value = record
        .get(index)
        .ok_or_else(|| format!("missing value for '{}'", field_name))?;

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("missing value for '{}'", field_name));
    }

    Ok(trimmed)
}

/// Parse a date in the fixed `YYYY-MM-DD` pattern
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Parse a finite real number
pub fn parse_measurement(field_name: &str, value: &str) -> std::result::Result<f64, String> {
    let trimmed = value.trim();
    let parsed = trimmed.parse::<f64>().map_err(|e| {
        format!(
            "could not convert {} value '{}' to a number ({})",
            field_name, trimmed, e
        )
    })?;

    if !parsed.is_finite() {
        return Err(format!(
            "{} value '{}' is not a finite number",
            field_name, trimmed
        ));
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_accepts_fixed_pattern() {
        assert_eq!(
            parse_date("2024-02-29"),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert_eq!(parse_date(" 2024-01-05 "), NaiveDate::from_ymd_opt(2024, 1, 5));
    }

    #[test]
    fn test_parse_date_rejects_other_patterns() {
        assert!(parse_date("01/05/2024").is_none());
        assert!(parse_date("2023-02-29").is_none());
        assert!(parse_date("2024-13-01").is_none());
        assert!(parse_date("2024-01-05 09:00:00").is_none());
        assert!(parse_date("yesterday").is_none());
    }

    #[test]
    fn test_parse_measurement() {
        assert_eq!(parse_measurement("temperature", "21.5").unwrap(), 21.5);
        assert_eq!(parse_measurement("temperature", "-3").unwrap(), -3.0);
        assert_eq!(parse_measurement("humidity", "1e2").unwrap(), 100.0);

        let err = parse_measurement("temperature", "abc").unwrap_err();
        assert!(err.contains("temperature"));
        assert!(err.contains("'abc'"));
    }

    #[test]
    fn test_parse_measurement_rejects_non_finite() {
        assert!(parse_measurement("precipitation", "NaN").is_err());
        assert!(parse_measurement("precipitation", "inf").is_err());
    }
}
