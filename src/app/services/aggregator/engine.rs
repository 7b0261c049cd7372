//! Statistics accumulation over validated weather records

use tracing::{debug, info};

use crate::app::models::{ExtremeEvent, Statistics, WeatherRecord};
use crate::config::ExtremeThresholds;
use crate::{Error, Result};

/// Aggregate records into a statistics snapshot
///
/// Returns [`Error::EmptyDataset`] when there is nothing to average; callers
/// must not write any output in that case.
pub fn aggregate(records: &[WeatherRecord], thresholds: &ExtremeThresholds) -> Result<Statistics> {
    if records.is_empty() {
        return Err(Error::EmptyDataset);
    }

    let mut accumulator = StatisticsAccumulator::new(thresholds);
    for record in records {
        accumulator.add(record);
    }

    let statistics = accumulator.finish();
    info!(
        "Aggregated {} records: {} hot, {} cold, {} humid, {} rainy days",
        statistics.data_points,
        statistics.hot_days.len(),
        statistics.cold_days.len(),
        statistics.humid_days.len(),
        statistics.rainy_days.len()
    );

    Ok(statistics)
}

/// Round to two decimal places, ties away from zero
///
/// A result that rounds to zero is returned as positive zero so it never
/// renders as `-0.00`.
pub fn round_to_two_decimals(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Running sums and extreme-event lists; only [`aggregate`] sees it mutate
struct StatisticsAccumulator<'a> {
    thresholds: &'a ExtremeThresholds,
    count: usize,
    temperature_sum: f64,
    humidity_sum: f64,
    precipitation_sum: f64,
    hot_days: Vec<ExtremeEvent>,
    cold_days: Vec<ExtremeEvent>,
    humid_days: Vec<ExtremeEvent>,
    rainy_days: Vec<ExtremeEvent>,
}

impl<'a> StatisticsAccumulator<'a> {
    fn new(thresholds: &'a ExtremeThresholds) -> Self {
        Self {
            thresholds,
            count: 0,
            temperature_sum: 0.0,
            humidity_sum: 0.0,
            precipitation_sum: 0.0,
            hot_days: Vec::new(),
            cold_days: Vec::new(),
            humid_days: Vec::new(),
            rainy_days: Vec::new(),
        }
    }

    fn add(&mut self, record: &WeatherRecord) {
        self.count += 1;
        self.temperature_sum += record.temperature;
        self.humidity_sum += record.humidity;
        self.precipitation_sum += record.precipitation;

        if record.temperature > self.thresholds.hot_above {
            self.hot_days
                .push(ExtremeEvent::new(record.date, record.temperature));
        } else if record.temperature < self.thresholds.cold_below {
            self.cold_days
                .push(ExtremeEvent::new(record.date, record.temperature));
        }

        if record.humidity > self.thresholds.humid_above {
            self.humid_days
                .push(ExtremeEvent::new(record.date, record.humidity));
        }

        if record.precipitation > self.thresholds.rainy_above {
            self.rainy_days
                .push(ExtremeEvent::new(record.date, record.precipitation));
        }
    }

    fn finish(self) -> Statistics {
        let count = self.count as f64;
        debug!(
            "Raw sums over {} records: temperature={}, humidity={}, precipitation={}",
            self.count, self.temperature_sum, self.humidity_sum, self.precipitation_sum
        );

        Statistics {
            avg_temperature: round_to_two_decimals(self.temperature_sum / count),
            avg_humidity: round_to_two_decimals(self.humidity_sum / count),
            avg_precipitation: round_to_two_decimals(self.precipitation_sum / count),
            data_points: self.count,
            hot_days: self.hot_days,
            cold_days: self.cold_days,
            humid_days: self.humid_days,
            rainy_days: self.rainy_days,
        }
    }
}
