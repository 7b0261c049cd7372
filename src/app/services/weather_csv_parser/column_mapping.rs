//! Column mapping for weather CSV headers
//!
//! This module locates the required columns in a header row regardless of
//! case, position, or surrounding whitespace. Extra columns are ignored.

use crate::constants::REQUIRED_COLUMNS;
use crate::{Error, Result};
use csv::StringRecord;
use std::collections::HashMap;

/// Column mapping from lower-cased header name to field index
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Lower-cased column name to index mapping (first occurrence wins)
    pub name_to_index: HashMap<String, usize>,

    /// Number of columns declared in the header
    pub total_columns: usize,
}

impl ColumnMapping {
    /// Analyze column headers and ensure every required column is present
    pub fn analyze(headers: &StringRecord) -> Result<Self> {
        let mut name_to_index = HashMap::new();

        for (index, header) in headers.iter().enumerate() {
            let column_name = header.trim().to_lowercase();
            name_to_index.entry(column_name).or_insert(index);
        }

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|column| !name_to_index.contains_key(**column))
            .map(|column| column.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(Error::missing_columns(missing));
        }

        Ok(ColumnMapping {
            name_to_index,
            total_columns: headers.len(),
        })
    }

    /// Get the index for a given column name (case-insensitive)
    pub fn get_index(&self, column_name: &str) -> Option<usize> {
        self.name_to_index
            .get(&column_name.to_lowercase())
            .copied()
    }

    /// Number of header columns beyond the required set
    pub fn extra_columns(&self) -> usize {
        self.total_columns.saturating_sub(REQUIRED_COLUMNS.len())
    }
}
