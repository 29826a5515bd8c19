//! Configuration for the welfare engine.

use num_traits::Float;

use crate::error::EngineError;

/// Large-country pass-through configuration.
///
/// When a large country levies an import tariff or pays an export
/// subsidy, part of the levy is absorbed by foreign sellers as a lower
/// world price. The fraction absorbed is a modelling simplification,
/// not a structural constant of the engine, so it is configuration with
/// conventional textbook magnitudes as defaults. Small-country scenarios
/// ignore both shares.
///
/// # Default Values
///
/// | Parameter | Default | Description |
/// |-----------|---------|-------------|
/// | `tariff_passthrough` | 0.30 | Share of a tariff depressing the world price |
/// | `subsidy_passthrough` | 0.40 | Share of an export subsidy depressing the world price |
///
/// # Examples
///
/// ```rust
/// use welfare_engine::EngineConfig;
///
/// let config = EngineConfig::<f64>::default();
/// assert!((config.tariff_passthrough - 0.3).abs() < 1e-12);
///
/// let custom = EngineConfig::new()
///     .with_tariff_passthrough(0.25_f64)
///     .with_subsidy_passthrough(0.5);
/// assert!(custom.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineConfig<T: Float> {
    /// Share of a tariff absorbed by foreign sellers under `TradeScale::Large`.
    pub tariff_passthrough: T,

    /// Share of an export subsidy absorbed by foreign buyers under `TradeScale::Large`.
    pub subsidy_passthrough: T,
}

impl<T: Float> Default for EngineConfig<T> {
    fn default() -> Self {
        Self {
            tariff_passthrough: T::from(0.3).unwrap(),
            subsidy_passthrough: T::from(0.4).unwrap(),
        }
    }
}

impl<T: Float> EngineConfig<T> {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tariff pass-through share.
    pub fn with_tariff_passthrough(mut self, share: T) -> Self {
        self.tariff_passthrough = share;
        self
    }

    /// Sets the subsidy pass-through share.
    pub fn with_subsidy_passthrough(mut self, share: T) -> Self {
        self.subsidy_passthrough = share;
        self
    }

    /// Validates the configuration.
    ///
    /// Each share must lie in `[0, 1)`: a share of 1 or more would mean
    /// the levy depresses the world price by at least its own magnitude,
    /// leaving the domestic price unchanged or inverted.
    ///
    /// # Errors
    /// `EngineError::InvalidConfig` naming the offending field.
    pub fn validate(&self) -> Result<(), EngineError> {
        let zero = T::zero();
        let one = T::one();
        if !(self.tariff_passthrough >= zero && self.tariff_passthrough < one) {
            return Err(EngineError::InvalidConfig(
                "tariff_passthrough must be in [0, 1)".to_string(),
            ));
        }
        if !(self.subsidy_passthrough >= zero && self.subsidy_passthrough < one) {
            return Err(EngineError::InvalidConfig(
                "subsidy_passthrough must be in [0, 1)".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::<f64>::default();
        assert_relative_eq!(config.tariff_passthrough, 0.3);
        assert_relative_eq!(config.subsidy_passthrough, 0.4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_setters() {
        let config = EngineConfig::new()
            .with_tariff_passthrough(0.2_f64)
            .with_subsidy_passthrough(0.1);
        assert_relative_eq!(config.tariff_passthrough, 0.2);
        assert_relative_eq!(config.subsidy_passthrough, 0.1);
    }

    #[test]
    fn test_validate_rejects_negative_share() {
        let config = EngineConfig::new().with_tariff_passthrough(-0.1_f64);
        let err = config.validate().unwrap_err();
        assert!(format!("{}", err).contains("tariff_passthrough"));
    }

    #[test]
    fn test_validate_rejects_full_passthrough() {
        let config = EngineConfig::new().with_subsidy_passthrough(1.0_f64);
        let err = config.validate().unwrap_err();
        assert!(format!("{}", err).contains("subsidy_passthrough"));
    }

    #[test]
    fn test_validate_rejects_nan_share() {
        let config = EngineConfig::new().with_tariff_passthrough(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_shares_are_valid() {
        // Zero pass-through reduces Large to Small behaviour.
        let config = EngineConfig::new()
            .with_tariff_passthrough(0.0_f64)
            .with_subsidy_passthrough(0.0);
        assert!(config.validate().is_ok());
    }
}
