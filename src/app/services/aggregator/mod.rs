//! Single-pass aggregation of validated weather records
//!
//! This module reduces the validated record set to an immutable
//! [`Statistics`](crate::app::models::Statistics) snapshot: three rounded
//! averages, the record count, and four extreme-event lists.
//!
//! # Classification
//!
//! Each record is classified in one pass, with strict comparisons:
//!
//! 1. **Hot / cold**: temperature above the hot threshold, otherwise below the
//!    cold threshold. A record is never both.
//! 2. **Humid**: humidity above the humid threshold, independent of (1).
//! 3. **Rainy**: precipitation above the rainy threshold, independent of (1)
//!    and (2).
//!
//! A single date can therefore appear in up to three lists at once.
//!
//! # Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use weather_summary::app::models::WeatherRecord;
//! use weather_summary::app::services::aggregator::aggregate;
//! use weather_summary::config::ExtremeThresholds;
//!
//! # fn example() -> weather_summary::Result<()> {
//! let date = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
//! let records = vec![WeatherRecord::new(date, 32.0, 40.0, 0.0)];
//!
//! let stats = aggregate(&records, &ExtremeThresholds::default())?;
//! assert_eq!(stats.hot_days.len(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod engine;

#[cfg(test)]
pub mod tests;

pub use engine::{aggregate, round_to_two_decimals};
