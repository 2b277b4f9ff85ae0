//! Tunables for the synthetic generator.
//!
//! Defaults reproduce the behaviour clients already depend on; overriding
//! them is meant for tests and demos.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid generator config: {0}")]
    Invalid(String),
}

/// Largest accepted gap between historical observations (about a century).
pub const MAX_HISTORY_STEP_DAYS: i64 = 36_500;

/// Parameters of the field-index sampler and the historical series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of synthetic readings per field request.
    pub sample_count: usize,

    /// Standard deviation of the per-pixel normal distribution.
    pub sample_std_dev: f64,

    /// Half-width of the uniform jitter applied to the seasonal baseline.
    pub base_jitter: f64,

    /// Clamp for the jittered baseline.
    pub base_min: f64,
    pub base_max: f64,

    /// Number of equal-width zones the observed range is split into.
    pub zone_count: usize,

    /// Upper bound on the readings returned for visualization.
    pub subsample_size: usize,

    /// Days between consecutive historical observations.
    pub history_step_days: i64,

    /// Starting level of the historical series and its jitter.
    pub history_initial: f64,
    pub history_initial_jitter: f64,

    /// Pull toward the seasonal curve; the remainder carries the previous value.
    pub history_trend_weight: f64,

    /// Half-width of the per-step noise and the weight it is applied with.
    pub history_noise: f64,
    pub history_noise_weight: f64,

    /// Clamp for every historical value.
    pub history_min: f64,
    pub history_max: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sample_count: 1000,
            sample_std_dev: 0.1,
            base_jitter: 0.15,
            base_min: 0.05,
            base_max: 0.95,
            zone_count: 5,
            subsample_size: 100,
            history_step_days: 16,
            history_initial: 0.4,
            history_initial_jitter: 0.1,
            history_trend_weight: 0.7,
            history_noise: 0.05,
            history_noise_weight: 0.3,
            history_min: 0.1,
            history_max: 0.9,
        }
    }
}

impl GeneratorConfig {
    /// Reject settings that would make generation panic or break its bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_count == 0 {
            return Err(invalid("sample_count must be at least 1"));
        }
        if self.zone_count == 0 {
            return Err(invalid("zone_count must be at least 1"));
        }
        if !(1..=MAX_HISTORY_STEP_DAYS).contains(&self.history_step_days) {
            return Err(invalid(format!(
                "history_step_days must be within [1, {}]",
                MAX_HISTORY_STEP_DAYS
            )));
        }

        let non_negative = [
            ("sample_std_dev", self.sample_std_dev),
            ("base_jitter", self.base_jitter),
            ("history_initial_jitter", self.history_initial_jitter),
            ("history_noise", self.history_noise),
            ("history_noise_weight", self.history_noise_weight),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(format!("{} must be a non-negative number", name)));
            }
        }

        if !(0.0..=1.0).contains(&self.history_trend_weight) {
            return Err(invalid("history_trend_weight must be within [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.history_initial) {
            return Err(invalid("history_initial must be within [0, 1]"));
        }

        check_range("base", self.base_min, self.base_max)?;
        check_range("history", self.history_min, self.history_max)?;

        Ok(())
    }
}

fn check_range(name: &str, min: f64, max: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&min) || !(0.0..=1.0).contains(&max) || min > max {
        return Err(invalid(format!(
            "{}_min/{}_max must satisfy 0 <= min <= max <= 1 (got {} / {})",
            name, name, min, max
        )));
    }
    Ok(())
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(message.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GeneratorConfig::default();
        assert_eq!(config.sample_count, 1000);
        assert_eq!(config.zone_count, 5);
        assert_eq!(config.subsample_size, 100);
        assert_eq!(config.history_step_days, 16);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: GeneratorConfig = serde_yaml::from_str("sample_count: 50\n").unwrap();
        assert_eq!(config.sample_count, 50);
        assert_eq!(config.sample_std_dev, 0.1);
        assert_eq!(config.history_max, 0.9);
    }

    #[test]
    fn test_rejects_zero_samples() {
        let config = GeneratorConfig {
            sample_count: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_negative_std_dev() {
        let config = GeneratorConfig {
            sample_std_dev: -0.1,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("sample_std_dev"));
    }

    #[test]
    fn test_rejects_oversized_history_step() {
        let config = GeneratorConfig {
            history_step_days: i64::MAX,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("history_step_days"));

        let config = GeneratorConfig {
            history_step_days: MAX_HISTORY_STEP_DAYS,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_nan_history_initial() {
        let config: GeneratorConfig = serde_yaml::from_str("history_initial: .nan\n").unwrap();
        assert!(config.history_initial.is_nan());

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("history_initial"));
    }

    #[test]
    fn test_rejects_nan_trend_weight() {
        let config = GeneratorConfig {
            history_trend_weight: f64::NAN,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("history_trend_weight"));
    }

    #[test]
    fn test_rejects_inverted_history_bounds() {
        let config = GeneratorConfig {
            history_min: 0.8,
            history_max: 0.2,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
