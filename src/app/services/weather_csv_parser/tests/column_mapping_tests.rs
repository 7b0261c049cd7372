//! Tests for header analysis

use super::*;
use crate::Error;

#[test]
fn test_standard_header_maps_all_columns() {
    let mapping = standard_mapping();

    assert_eq!(mapping.get_index("date"), Some(0));
    assert_eq!(mapping.get_index("temperature"), Some(1));
    assert_eq!(mapping.get_index("humidity"), Some(2));
    assert_eq!(mapping.get_index("precipitation"), Some(3));
    assert_eq!(mapping.extra_columns(), 0);
}

#[test]
fn test_header_is_case_insensitive_and_position_independent() {
    let headers = header_record("Station, PRECIPITATION ,Humidity,Date,TeMpErAtUrE,notes");
    let mapping = ColumnMapping::analyze(&headers).unwrap();

    assert_eq!(mapping.get_index("date"), Some(3));
    assert_eq!(mapping.get_index("Temperature"), Some(4));
    assert_eq!(mapping.get_index("humidity"), Some(2));
    assert_eq!(mapping.get_index("precipitation"), Some(1));
    assert_eq!(mapping.get_index("station"), Some(0));
    assert_eq!(mapping.extra_columns(), 2);
}

#[test]
fn test_duplicate_header_uses_first_occurrence() {
    let headers = header_record("date,temperature,humidity,precipitation,Temperature");
    let mapping = ColumnMapping::analyze(&headers).unwrap();

    assert_eq!(mapping.get_index("temperature"), Some(1));
}

#[test]
fn test_missing_columns_are_reported_together() {
    let headers = header_record("date,temp,humidity");
    let err = ColumnMapping::analyze(&headers).unwrap_err();

    match err {
        Error::MissingColumns { missing } => {
            assert_eq!(missing, vec!["temperature", "precipitation"]);
        }
        other => panic!("Expected MissingColumns error, got {:?}", other),
    }
}

#[test]
fn test_empty_header_is_missing_everything() {
    let err = ColumnMapping::analyze(&StringRecord::new()).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Missing required columns: date, temperature, humidity, precipitation"
    );
}
