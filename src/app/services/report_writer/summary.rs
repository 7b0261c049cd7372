//! Flat `Metric,Value` summary table

use std::io::Write;
use std::path::Path;
use tracing::info;

use super::create_output_file;
use crate::app::models::Statistics;
use crate::config::ExtremeThresholds;
use crate::{Error, Result};

/// Build the eight summary rows in their fixed order
///
/// Averages always carry exactly two decimals; counts are plain integers.
pub fn summary_rows(stats: &Statistics, thresholds: &ExtremeThresholds) -> Vec<(String, String)> {
    vec![
        (
            "Average Temperature (°C)".to_string(),
            format!("{:.2}", stats.avg_temperature),
        ),
        (
            "Average Humidity (%)".to_string(),
            format!("{:.2}", stats.avg_humidity),
        ),
        (
            "Average Precipitation (mm)".to_string(),
            format!("{:.2}", stats.avg_precipitation),
        ),
        (
            "Data Points Analyzed".to_string(),
            stats.data_points.to_string(),
        ),
        (
            format!("Number of Hot Days (>{}°C)", thresholds.hot_above),
            stats.hot_days.len().to_string(),
        ),
        (
            format!("Number of Cold Days (<{}°C)", thresholds.cold_below),
            stats.cold_days.len().to_string(),
        ),
        (
            format!("Number of Humid Days (>{}%)", thresholds.humid_above),
            stats.humid_days.len().to_string(),
        ),
        (
            format!("Number of Rainy Days (>{}mm)", thresholds.rainy_above),
            stats.rainy_days.len().to_string(),
        ),
    ]
}

/// Write the summary table as CSV to any writer
pub fn write_summary<W: Write>(
    writer: W,
    stats: &Statistics,
    thresholds: &ExtremeThresholds,
) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["Metric", "Value"])?;
    for (metric, value) in summary_rows(stats, thresholds) {
        csv_writer.write_record([metric.as_str(), value.as_str()])?;
    }

    csv_writer
        .flush()
        .map_err(|e| Error::file_access("summary", "Failed to flush summary output", e))
}

/// Write the summary table to a file path
pub fn write_summary_file(
    path: &Path,
    stats: &Statistics,
    thresholds: &ExtremeThresholds,
) -> Result<()> {
    let file = create_output_file(path)?;

    write_summary(file, stats, thresholds).map_err(|e| match e {
        Error::FileAccess {
            message, source, ..
        } => Error::file_access(path.display().to_string(), message, source),
        Error::CsvParsing {
            message, source, ..
        } => Error::csv_parsing(path.display().to_string(), message, source),
        other => other,
    })?;

    info!("Summary written to {}", path.display());
    Ok(())
}
