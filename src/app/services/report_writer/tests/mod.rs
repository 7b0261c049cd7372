//! Test fixtures for the output renderers


use crate::app::models::{ExtremeEvent, Statistics};
use chrono::{NaiveDate, NaiveDateTime};

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Statistics matching the two-valid-row reference dataset
pub fn create_reference_statistics() -> Statistics {
    Statistics {
        avg_temperature: 15.0,
        avg_humidity: 72.5,
        avg_precipitation: 20.0,
        data_points: 2,
        hot_days: vec![ExtremeEvent::new(date("2024-01-01"), 35.0)],
        cold_days: vec![ExtremeEvent::new(date("2024-01-02"), -5.0)],
        humid_days: vec![ExtremeEvent::new(date("2024-01-02"), 95.0)],
        rainy_days: vec![ExtremeEvent::new(date("2024-01-02"), 30.0)],
    }
}

/// Statistics with no extreme events
pub fn create_calm_statistics() -> Statistics {
    Statistics {
        avg_temperature: 8.25,
        avg_humidity: 35.0,
        avg_precipitation: 1.5,
        data_points: 4,
        hot_days: Vec::new(),
        cold_days: Vec::new(),
        humid_days: Vec::new(),
        rainy_days: Vec::new(),
    }
}

pub fn fixed_timestamp() -> NaiveDateTime {
    NaiveDateTime::parse_from_str("2024-05-01 12:30:00", "%Y-%m-%d %H:%M:%S").unwrap()
}
