//! Validation statistics and result structures for weather CSV processing
//!
//! This module provides types for tracking how many rows were kept or dropped
//! and for handing the validated records to the aggregation stage.

use crate::app::models::{Diagnostic, Severity, WeatherRecord};

/// Validation result with records, diagnostics and counters
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Rows that passed date and numeric parsing, in input order
    pub records: Vec<WeatherRecord>,

    /// Every diagnostic produced, in row order
    pub diagnostics: Vec<Diagnostic>,

    /// Summary counters
    pub stats: ValidationStats,
}

/// Simple validation statistics
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ValidationStats {
    /// Total number of data rows encountered (header excluded)
    pub total_rows: usize,

    /// Rows kept as valid records
    pub valid_rows: usize,

    /// Rows dropped because of a parse failure
    pub dropped_rows: usize,

    /// Warning diagnostics emitted
    pub warnings: usize,

    /// Error diagnostics emitted
    pub errors: usize,
}

impl ValidationStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_rows: 0,
            valid_rows: 0,
            dropped_rows: 0,
            warnings: 0,
            errors: 0,
        }
    }

    /// Count a diagnostic against its severity
    pub fn record_diagnostic(&mut self, diagnostic: &Diagnostic) {
        match diagnostic.severity {
            Severity::Warning => self.warnings += 1,
            Severity::Error => self.errors += 1,
        }
    }

    /// Calculate the share of rows kept, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.valid_rows as f64 / self.total_rows as f64) * 100.0
        }
    }

    /// Get summary of validation statistics
    pub fn summary(&self) -> String {
        format!(
            "Validation Summary: {} rows -> {} valid ({:.1}%) | Dropped: {} | Warnings: {} | Errors: {}",
            self.total_rows,
            self.valid_rows,
            self.success_rate(),
            self.dropped_rows,
            self.warnings,
            self.errors
        )
    }
}

impl Default for ValidationStats {
    fn default() -> Self {
        Self::new()
    }
}
