//! Error types for engine configuration.
//!
//! This module provides:
//! - `EngineError`: Errors from engine configuration validation

use thiserror::Error;

/// Engine configuration errors.
///
/// The engine itself is pure arithmetic and cannot fail at evaluation
/// time; the only failure mode is an invalid configuration or market,
/// both rejected at construction.
///
/// # Examples
/// ```
/// use welfare_engine::EngineError;
///
/// let err = EngineError::InvalidConfig("tariff_passthrough must be in [0, 1)".to_string());
/// assert!(format!("{}", err).contains("tariff_passthrough"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EngineError {
    /// Invalid engine configuration value.
    #[error("Invalid engine configuration: {0}")]
    InvalidConfig(String),
}
