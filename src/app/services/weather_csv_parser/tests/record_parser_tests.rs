//! Tests for single-row conversion and range checks

use super::*;
use crate::app::models::Severity;
use crate::app::services::weather_csv_parser::parse_weather_record;
use crate::app::services::weather_csv_parser::range_checks::check_plausibility;
use crate::config::PlausibilityLimits;
use chrono::NaiveDate;

#[test]
fn test_valid_row_becomes_record() {
    let mapping = standard_mapping();
    let record = data_record(&["2024-06-01", "21.5", "64", "0.2"]);

    let parsed = parse_weather_record(&record, &mapping, 2).unwrap();

    assert_eq!(parsed.date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    assert_eq!(parsed.temperature, 21.5);
    assert_eq!(parsed.humidity, 64.0);
    assert_eq!(parsed.precipitation, 0.2);
}

#[test]
fn test_invalid_date_is_a_warning() {
    let mapping = standard_mapping();
    let record = data_record(&["06/01/2024", "abc", "64", "0.2"]);

    let diagnostic = parse_weather_record(&record, &mapping, 5).unwrap_err();

    assert_eq!(diagnostic.row_number, 5);
    assert_eq!(diagnostic.severity, Severity::Warning);
    assert_eq!(diagnostic.message, "Invalid date format in row 5: 06/01/2024");
}

#[test]
fn test_non_numeric_field_is_an_error() {
    let mapping = standard_mapping();
    let record = data_record(&["2024-01-03", "20", "wet", "10"]);

    let diagnostic = parse_weather_record(&record, &mapping, 4).unwrap_err();

    assert_eq!(diagnostic.severity, Severity::Error);
    assert!(diagnostic.message.starts_with("Error processing row 4:"));
    assert!(diagnostic.message.contains("humidity"));
    assert!(diagnostic.message.contains("'wet'"));
}

#[test]
fn test_missing_field_is_an_error() {
    let mapping = standard_mapping();
    let short_row = data_record(&["2024-01-03", "20", "50"]);
    let blank_cell = data_record(&["2024-01-03", "", "50", "1"]);

    let short = parse_weather_record(&short_row, &mapping, 2).unwrap_err();
    assert_eq!(short.severity, Severity::Error);
    assert!(short.message.contains("missing value for 'precipitation'"));

    let blank = parse_weather_record(&blank_cell, &mapping, 3).unwrap_err();
    assert_eq!(blank.severity, Severity::Error);
    assert!(blank.message.contains("missing value for 'temperature'"));
}

#[test]
fn test_missing_date_is_an_error() {
    let mapping = standard_mapping();
    let record = data_record(&["", "20", "50", "1"]);

    let diagnostic = parse_weather_record(&record, &mapping, 2).unwrap_err();

    assert_eq!(diagnostic.severity, Severity::Error);
    assert!(diagnostic.message.contains("'date'"));
}

#[test]
fn test_range_checks_are_independent() {
    let mapping = standard_mapping();
    let record = data_record(&["2024-01-01", "55", "120", "-1"]);
    let parsed = parse_weather_record(&record, &mapping, 7).unwrap();

    let warnings = check_plausibility(&parsed, &PlausibilityLimits::default(), 7);

    assert_eq!(warnings.len(), 3);
    assert!(warnings.iter().all(|w| w.severity == Severity::Warning));
    assert_eq!(warnings[0].message, "Temperature out of range in row 7: 55°C");
    assert_eq!(warnings[1].message, "Humidity out of range in row 7: 120%");
    assert_eq!(warnings[2].message, "Negative precipitation in row 7: -1mm");
}

#[test]
fn test_range_limits_are_inclusive() {
    let mapping = standard_mapping();
    let limits = PlausibilityLimits::default();

    for cells in [
        ["2024-01-01", "-50", "0", "0"],
        ["2024-01-02", "50", "100", "0"],
    ] {
        let parsed = parse_weather_record(&data_record(&cells), &mapping, 2).unwrap();
        assert!(check_plausibility(&parsed, &limits, 2).is_empty());
    }
}
