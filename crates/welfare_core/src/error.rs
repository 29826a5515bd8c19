//! Error types for market construction.
//!
//! This module provides:
//! - `MarketError`: Errors from market parameter validation

use thiserror::Error;

/// Market parameter validation errors.
///
/// Provides structured error handling for market construction with the
/// offending value attached to each failure mode.
///
/// # Variants
/// - `InvalidDemandSlope`: Non-positive demand slope
/// - `InvalidSupplySlope`: Non-positive supply slope
/// - `NonFiniteParameter`: A coefficient is NaN or infinite
///
/// # Examples
/// ```
/// use welfare_core::error::MarketError;
///
/// let err = MarketError::InvalidDemandSlope { slope: -1.0 };
/// assert!(format!("{}", err).contains("demand slope"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MarketError {
    /// Invalid demand slope (non-positive).
    #[error("Invalid demand slope: b = {slope}, must be positive")]
    InvalidDemandSlope {
        /// The invalid slope value
        slope: f64,
    },

    /// Invalid supply slope (non-positive).
    #[error("Invalid supply slope: d = {slope}, must be positive")]
    InvalidSupplySlope {
        /// The invalid slope value
        slope: f64,
    },

    /// A market coefficient is NaN or infinite.
    #[error("Non-finite market parameter: {name}")]
    NonFiniteParameter {
        /// Name of the offending coefficient
        name: &'static str,
    },
}
