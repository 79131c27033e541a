use std::ops::RangeInclusive;

use crate::error::{RegressionError, RegressionResult};

pub const DEFAULT_LEARNING_RATE: f64 = 0.01;
pub const DEFAULT_MAX_ITERATIONS: usize = 30;

pub const CONVENTIONAL_LEARNING_RATES: RangeInclusive<f64> = 0.001..=0.1;
pub const CONVENTIONAL_MAX_ITERATIONS: RangeInclusive<usize> = 10..=100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingConfig {
    pub learning_rate: f64,
    pub max_iterations: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            learning_rate: DEFAULT_LEARNING_RATE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl TrainingConfig {
    pub fn new(learning_rate: f64, max_iterations: usize) -> RegressionResult<Self> {
        let config = Self {
            learning_rate,
            max_iterations,
        };

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> RegressionResult<()> {
        validate_learning_rate(self.learning_rate)?;
        validate_max_iterations(self.max_iterations)
    }

    /// Settings that are valid but outside the ranges the trainer usually
    /// offers.
    pub fn unconventional_settings(&self) -> Vec<String> {
        let mut settings = Vec::new();

        if !CONVENTIONAL_LEARNING_RATES.contains(&self.learning_rate) {
            settings.push(format!(
                "learning rate {} is outside the usual range {:?}",
                self.learning_rate, CONVENTIONAL_LEARNING_RATES
            ));
        }

        if !CONVENTIONAL_MAX_ITERATIONS.contains(&self.max_iterations) {
            settings.push(format!(
                "max iterations {} is outside the usual range {:?}",
                self.max_iterations, CONVENTIONAL_MAX_ITERATIONS
            ));
        }

        settings
    }
}

pub(crate) fn validate_learning_rate(learning_rate: f64) -> RegressionResult<()> {
    if !learning_rate.is_finite() || learning_rate <= 0. {
        return Err(RegressionError::InvalidConfiguration(format!(
            "learning rate must be a positive number, got {learning_rate}"
        )));
    }

    Ok(())
}

pub(crate) fn validate_max_iterations(max_iterations: usize) -> RegressionResult<()> {
    if max_iterations == 0 {
        return Err(RegressionError::InvalidConfiguration(
            "max iterations must be at least 1".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = TrainingConfig::default();

        assert_eq!(config.learning_rate, 0.01);
        assert_eq!(config.max_iterations, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_learning_rates() {
        for learning_rate in [0., -0.01, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                TrainingConfig::new(learning_rate, 30),
                Err(RegressionError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn rejects_zero_iterations() {
        assert!(matches!(
            TrainingConfig::new(0.01, 0),
            Err(RegressionError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn accepts_unconventional_values() {
        let config = TrainingConfig::new(5., 200).unwrap();

        assert_eq!(config.learning_rate, 5.);
        assert_eq!(config.max_iterations, 200);
        assert_eq!(config.unconventional_settings().len(), 2);
    }

    #[test]
    fn conventional_values_have_no_remarks() {
        assert!(TrainingConfig::default().unconventional_settings().is_empty());
        assert!(TrainingConfig::new(0.1, 10)
            .unwrap()
            .unconventional_settings()
            .is_empty());

        let settings = TrainingConfig::new(0.01, 500).unwrap().unconventional_settings();
        assert_eq!(settings.len(), 1);
        assert!(settings[0].starts_with("max iterations 500"));
    }
}
