//! Configuration management and validation.
//!
//! Provides the threshold sets that drive extreme-event classification,
//! plausibility warnings, and the qualitative wording of the narrative report.

use crate::constants::{extremes, narrative, plausibility};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Strict thresholds for the four extreme-event lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtremeThresholds {
    /// Temperature strictly above this is a hot day (°C)
    pub hot_above: f64,

    /// Temperature strictly below this is a cold day (°C)
    pub cold_below: f64,

    /// Humidity strictly above this is a humid day (%)
    pub humid_above: f64,

    /// Precipitation strictly above this is a rainy day (mm)
    pub rainy_above: f64,
}

impl Default for ExtremeThresholds {
    fn default() -> Self {
        Self {
            hot_above: extremes::HOT_ABOVE_C,
            cold_below: extremes::COLD_BELOW_C,
            humid_above: extremes::HUMID_ABOVE_PCT,
            rainy_above: extremes::RAINY_ABOVE_MM,
        }
    }
}

/// Plausible value ranges; records outside them are kept but flagged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlausibilityLimits {
    pub temperature_min: f64,
    pub temperature_max: f64,
    pub humidity_min: f64,
    pub humidity_max: f64,
    pub precipitation_min: f64,
}

impl Default for PlausibilityLimits {
    fn default() -> Self {
        Self {
            temperature_min: plausibility::TEMPERATURE_MIN_C,
            temperature_max: plausibility::TEMPERATURE_MAX_C,
            humidity_min: plausibility::HUMIDITY_MIN_PCT,
            humidity_max: plausibility::HUMIDITY_MAX_PCT,
            precipitation_min: plausibility::PRECIPITATION_MIN_MM,
        }
    }
}

/// Cut-offs choosing between "high", "moderate" and "low" in the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeThresholds {
    pub temperature_high: f64,
    pub temperature_low: f64,
    pub humidity_high: f64,
    pub humidity_low: f64,
    pub precipitation_high: f64,
    pub precipitation_low: f64,
}

impl Default for NarrativeThresholds {
    fn default() -> Self {
        Self {
            temperature_high: narrative::TEMPERATURE_HIGH_C,
            temperature_low: narrative::TEMPERATURE_LOW_C,
            humidity_high: narrative::HUMIDITY_HIGH_PCT,
            humidity_low: narrative::HUMIDITY_LOW_PCT,
            precipitation_high: narrative::PRECIPITATION_HIGH_MM,
            precipitation_low: narrative::PRECIPITATION_LOW_MM,
        }
    }
}

/// Global configuration for a weather analysis run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Extreme-event classification thresholds
    pub extremes: ExtremeThresholds,

    /// Range checks applied to every valid record
    pub plausibility: PlausibilityLimits,

    /// Qualitative wording thresholds for the narrative report
    pub narrative: NarrativeThresholds,
}

impl AnalysisConfig {
    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        let values = [
            self.extremes.hot_above,
            self.extremes.cold_below,
            self.extremes.humid_above,
            self.extremes.rainy_above,
            self.plausibility.temperature_min,
            self.plausibility.temperature_max,
            self.plausibility.humidity_min,
            self.plausibility.humidity_max,
            self.plausibility.precipitation_min,
            self.narrative.temperature_high,
            self.narrative.temperature_low,
            self.narrative.humidity_high,
            self.narrative.humidity_low,
            self.narrative.precipitation_high,
            self.narrative.precipitation_low,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(Error::configuration("All thresholds must be finite numbers"));
        }

        if self.extremes.cold_below >= self.extremes.hot_above {
            return Err(Error::configuration(format!(
                "Cold threshold ({}) must be below hot threshold ({})",
                self.extremes.cold_below, self.extremes.hot_above
            )));
        }

        check_range(
            "temperature plausibility",
            self.plausibility.temperature_min,
            self.plausibility.temperature_max,
        )?;
        check_range(
            "humidity plausibility",
            self.plausibility.humidity_min,
            self.plausibility.humidity_max,
        )?;
        check_range(
            "temperature narrative",
            self.narrative.temperature_low,
            self.narrative.temperature_high,
        )?;
        check_range(
            "humidity narrative",
            self.narrative.humidity_low,
            self.narrative.humidity_high,
        )?;
        check_range(
            "precipitation narrative",
            self.narrative.precipitation_low,
            self.narrative.precipitation_high,
        )?;

        debug!("Configuration validated: {:?}", self);
        Ok(())
    }
}

fn check_range(name: &str, low: f64, high: f64) -> Result<()> {
    if low > high {
        return Err(Error::configuration(format!(
            "Invalid {} range: lower bound {} exceeds upper bound {}",
            name, low, high
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AnalysisConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.extremes.hot_above, 30.0);
        assert_eq!(config.extremes.cold_below, 0.0);
        assert_eq!(config.extremes.humid_above, 90.0);
        assert_eq!(config.extremes.rainy_above, 25.0);
        assert_eq!(config.plausibility.temperature_min, -50.0);
        assert_eq!(config.plausibility.humidity_max, 100.0);
        assert_eq!(config.narrative.precipitation_low, 2.0);
    }

    #[test]
    fn test_inverted_extremes_rejected() {
        let mut config = AnalysisConfig::default();
        config.extremes.cold_below = 35.0;

        let err = config.validate().unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
        assert!(err.to_string().contains("Cold threshold"));
    }

    #[test]
    fn test_inverted_plausibility_rejected() {
        let mut config = AnalysisConfig::default();
        config.plausibility.humidity_min = 120.0;

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("humidity plausibility"));
    }

    #[test]
    fn test_non_finite_threshold_rejected() {
        let mut config = AnalysisConfig::default();
        config.narrative.temperature_high = f64::NAN;

        assert!(config.validate().is_err());
    }
}
