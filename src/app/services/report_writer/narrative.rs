//! Narrative text report

use chrono::NaiveDateTime;
use std::fmt;
use std::io::Write;
use std::path::Path;
use tracing::info;

use super::create_output_file;
use crate::app::models::{ExtremeEvent, Statistics};
use crate::config::{ExtremeThresholds, NarrativeThresholds};
use crate::constants::REPORT_TIMESTAMP_FORMAT;
use crate::{Error, Result};

/// Qualitative band for an average value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualitativeLevel {
    High,
    Moderate,
    Low,
}

impl QualitativeLevel {
    /// Classify a value: above `high` is High, below `low` is Low
    pub fn classify(value: f64, high: f64, low: f64) -> Self {
        if value > high {
            QualitativeLevel::High
        } else if value < low {
            QualitativeLevel::Low
        } else {
            QualitativeLevel::Moderate
        }
    }
}

impl fmt::Display for QualitativeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualitativeLevel::High => write!(f, "high"),
            QualitativeLevel::Moderate => write!(f, "moderate"),
            QualitativeLevel::Low => write!(f, "low"),
        }
    }
}

/// Render the narrative report as text
///
/// The generation timestamp is passed in so the rest of the output is a pure
/// function of the statistics.
pub fn render_report(
    stats: &Statistics,
    input_name: &str,
    generated_at: NaiveDateTime,
    extremes: &ExtremeThresholds,
    narrative: &NarrativeThresholds,
) -> String {
    let mut lines = vec![
        "Weather Data Analysis Report".to_string(),
        "============================".to_string(),
        String::new(),
        format!("Input file: {}", input_name),
        format!("Generated: {}", generated_at.format(REPORT_TIMESTAMP_FORMAT)),
        format!("Data points analyzed: {}", stats.data_points),
        String::new(),
        "Summary Statistics".to_string(),
        "------------------".to_string(),
        format!("Average Temperature: {:.2}°C", stats.avg_temperature),
        format!("Average Humidity: {:.2}%", stats.avg_humidity),
        format!("Average Precipitation: {:.2}mm", stats.avg_precipitation),
        String::new(),
        "Analysis".to_string(),
        "--------".to_string(),
    ];

    let temperature = QualitativeLevel::classify(
        stats.avg_temperature,
        narrative.temperature_high,
        narrative.temperature_low,
    );
    let humidity = QualitativeLevel::classify(
        stats.avg_humidity,
        narrative.humidity_high,
        narrative.humidity_low,
    );
    let precipitation = QualitativeLevel::classify(
        stats.avg_precipitation,
        narrative.precipitation_high,
        narrative.precipitation_low,
    );

    lines.push(format!(
        "The average temperature of {:.2}°C is {}.",
        stats.avg_temperature, temperature
    ));
    lines.push(format!(
        "The average humidity of {:.2}% is {}.",
        stats.avg_humidity, humidity
    ));
    lines.push(format!(
        "The average precipitation of {:.2}mm is {}.",
        stats.avg_precipitation, precipitation
    ));

    lines.push(String::new());
    lines.push("Extreme Weather Events".to_string());
    lines.push("----------------------".to_string());

    if stats.has_no_extremes() {
        lines.push("No extreme weather events detected".to_string());
    } else {
        push_events(
            &mut lines,
            &format!("Hot days (>{}°C)", extremes.hot_above),
            &stats.hot_days,
            "°C",
        );
        push_events(
            &mut lines,
            &format!("Cold days (<{}°C)", extremes.cold_below),
            &stats.cold_days,
            "°C",
        );
        push_events(
            &mut lines,
            &format!("Humid days (>{}%)", extremes.humid_above),
            &stats.humid_days,
            "%",
        );
        push_events(
            &mut lines,
            &format!("Rainy days (>{}mm)", extremes.rainy_above),
            &stats.rainy_days,
            "mm",
        );
    }

    let mut report = lines.join("\n");
    report.push('\n');
    report
}

fn push_events(lines: &mut Vec<String>, title: &str, events: &[ExtremeEvent], unit: &str) {
    if events.is_empty() {
        return;
    }

    lines.push(format!("{}: {}", title, events.len()));
    for event in events {
        lines.push(format!("  - {}: {:.1}{}", event.date, event.value, unit));
    }
}

/// Write a rendered report to a file path
pub fn write_report_file(path: &Path, report: &str) -> Result<()> {
    let mut file = create_output_file(path)?;

    file.write_all(report.as_bytes()).map_err(|e| {
        Error::file_access(path.display().to_string(), "Failed to write report", e)
    })?;

    info!("Report written to {}", path.display());
    Ok(())
}
