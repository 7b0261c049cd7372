//! Plausibility checks for parsed weather records
//!
//! Out-of-range values do not invalidate a record. Each check is independent,
//! so a single row can collect several warnings and still be kept.

use crate::app::models::{Diagnostic, WeatherRecord};
use crate::config::PlausibilityLimits;

/// Run every range check against a record and return the resulting warnings
pub fn check_plausibility(
    record: &WeatherRecord,
    limits: &PlausibilityLimits,
    row_number: usize,
) -> Vec<Diagnostic> {
    let mut warnings = Vec::new();

    if record.temperature < limits.temperature_min || record.temperature > limits.temperature_max
    {
        warnings.push(Diagnostic::warning(
            row_number,
            format!(
                "Temperature out of range in row {}: {}°C",
                row_number, record.temperature
            ),
        ));
    }

    if record.humidity < limits.humidity_min || record.humidity > limits.humidity_max {
        warnings.push(Diagnostic::warning(
            row_number,
            format!(
                "Humidity out of range in row {}: {}%",
                row_number, record.humidity
            ),
        ));
    }

    if record.precipitation < limits.precipitation_min {
        warnings.push(Diagnostic::warning(
            row_number,
            format!(
                "Negative precipitation in row {}: {}mm",
                row_number, record.precipitation
            ),
        ));
    }

    warnings
}
