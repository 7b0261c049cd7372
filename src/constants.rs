//! Application constants for the weather summary tool
//!
//! This module contains column names, default thresholds, and output naming
//! conventions used throughout the application.

// =============================================================================
// Input Columns and Formats
// =============================================================================

/// Column names that must be present in the input header (matched case-insensitively)
pub const REQUIRED_COLUMNS: &[&str] = &["date", "temperature", "humidity", "precipitation"];

/// Date column name
pub const DATE_COLUMN: &str = "date";

/// Temperature column name (°C)
pub const TEMPERATURE_COLUMN: &str = "temperature";

/// Relative humidity column name (%)
pub const HUMIDITY_COLUMN: &str = "humidity";

/// Precipitation column name (mm)
pub const PRECIPITATION_COLUMN: &str = "precipitation";

/// Accepted date pattern (YYYY-MM-DD)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Row number of the first data row; row 1 is the header
pub const FIRST_DATA_ROW: usize = 2;

// =============================================================================
// Output Naming
// =============================================================================

/// Default base name for generated files
pub const DEFAULT_OUTPUT_BASE: &str = "weather_output";

/// Suffix appended to the base name for the summary table
pub const SUMMARY_SUFFIX: &str = "_summary.csv";

/// Suffix appended to the base name for the narrative report
pub const REPORT_SUFFIX: &str = "_report.txt";

/// Timestamp format used in the report header
pub const REPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// Extreme Event Thresholds
// =============================================================================

/// Extreme event classification thresholds (all comparisons are strict)
pub mod extremes {
    /// Days warmer than this are hot (°C)
    pub const HOT_ABOVE_C: f64 = 30.0;

    /// Days colder than this are cold (°C)
    pub const COLD_BELOW_C: f64 = 0.0;

    /// Days more humid than this are humid (%)
    pub const HUMID_ABOVE_PCT: f64 = 90.0;

    /// Days wetter than this are rainy (mm)
    pub const RAINY_ABOVE_MM: f64 = 25.0;
}

// =============================================================================
// Plausibility Limits
// =============================================================================

/// Physically plausible ranges; values outside are kept but flagged
pub mod plausibility {
    pub const TEMPERATURE_MIN_C: f64 = -50.0;
    pub const TEMPERATURE_MAX_C: f64 = 50.0;
    pub const HUMIDITY_MIN_PCT: f64 = 0.0;
    pub const HUMIDITY_MAX_PCT: f64 = 100.0;
    pub const PRECIPITATION_MIN_MM: f64 = 0.0;
}

// =============================================================================
// Narrative Thresholds
// =============================================================================

/// Thresholds for the qualitative sentences in the narrative report
pub mod narrative {
    pub const TEMPERATURE_HIGH_C: f64 = 25.0;
    pub const TEMPERATURE_LOW_C: f64 = 10.0;
    pub const HUMIDITY_HIGH_PCT: f64 = 80.0;
    pub const HUMIDITY_LOW_PCT: f64 = 40.0;
    pub const PRECIPITATION_HIGH_MM: f64 = 10.0;
    pub const PRECIPITATION_LOW_MM: f64 = 2.0;
}
