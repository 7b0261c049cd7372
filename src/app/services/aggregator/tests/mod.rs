//! Tests for the aggregation engine


use crate::app::models::WeatherRecord;
use chrono::NaiveDate;

/// Parse a fixture date
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Create a test record
pub fn record(day: &str, temperature: f64, humidity: f64, precipitation: f64) -> WeatherRecord {
    WeatherRecord::new(date(day), temperature, humidity, precipitation)
}
