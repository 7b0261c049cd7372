//! Output renderers for aggregated weather statistics
//!
//! - [`summary`] - The fixed eight-row `Metric,Value` CSV table
//! - [`narrative`] - The optional human-readable text report
//!
//! Both renderers only read a finished [`Statistics`](crate::app::models::Statistics)
//! value and can target any writer, which keeps them testable without touching disk.

pub mod narrative;
pub mod summary;

#[cfg(test)]
pub mod tests;

pub use narrative::{QualitativeLevel, render_report, write_report_file};
pub use summary::{summary_rows, write_summary, write_summary_file};

use crate::{Error, Result};
use std::fs::File;
use std::path::Path;

/// Create an output file, mapping failures to a file access error
pub(crate) fn create_output_file(path: &Path) -> Result<File> {
    File::create(path).map_err(|e| {
        Error::file_access(
            path.display().to_string(),
            "Failed to create output file",
            e,
        )
    })
}
