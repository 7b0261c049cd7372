//! Core data structures for weather record processing
//!
//! Defines the validated record type, row-level diagnostics, and the immutable
//! statistics snapshot produced by aggregation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single validated daily weather observation
///
/// Created once from one input row and never modified afterwards. Values
/// outside plausible ranges are kept; they only produce warnings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// Observation date
    pub date: NaiveDate,
    /// Air temperature in °C
    pub temperature: f64,
    /// Relative humidity in %
    pub humidity: f64,
    /// Precipitation in mm
    pub precipitation: f64,
}

impl WeatherRecord {
    pub fn new(date: NaiveDate, temperature: f64, humidity: f64, precipitation: f64) -> Self {
        Self {
            date,
            temperature,
            humidity,
            precipitation,
        }
    }
}

/// Severity of a row-level diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Row is suspicious; whether it is kept depends on the check
    Warning,
    /// Row could not be parsed and was dropped
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "WARNING"),
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// Row-scoped validation message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// 1-based file row; the header is row 1 so data rows start at 2
    pub row_number: usize,
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(row_number: usize, message: impl Into<String>) -> Self {
        Self {
            row_number,
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn error(row_number: usize, message: impl Into<String>) -> Self {
        Self {
            row_number,
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

/// Date-tagged value in one of the extreme-event lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtremeEvent {
    pub date: NaiveDate,
    pub value: f64,
}

impl ExtremeEvent {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// Aggregate statistics over the full valid record set
///
/// Averages are rounded to two decimal places (half away from zero). The
/// extreme-event lists keep input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub avg_temperature: f64,
    pub avg_humidity: f64,
    pub avg_precipitation: f64,
    pub data_points: usize,
    pub hot_days: Vec<ExtremeEvent>,
    pub cold_days: Vec<ExtremeEvent>,
    pub humid_days: Vec<ExtremeEvent>,
    pub rainy_days: Vec<ExtremeEvent>,
}

impl Statistics {
    /// True when all four extreme-event lists are empty
    pub fn has_no_extremes(&self) -> bool {
        self.hot_days.is_empty()
            && self.cold_days.is_empty()
            && self.humid_days.is_empty()
            && self.rainy_days.is_empty()
    }

    /// Total entries across all extreme-event lists
    pub fn extreme_event_count(&self) -> usize {
        self.hot_days.len() + self.cold_days.len() + self.humid_days.len() + self.rainy_days.len()
    }
}
