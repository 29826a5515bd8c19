//! CLI error types

use thiserror::Error;
use welfare_core::MarketError;
use welfare_engine::EngineError;

/// Errors surfaced by the command-line interface.
#[derive(Debug, Error)]
pub enum CliError {
    /// A flag combination does not describe a valid scenario.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The market parameters were rejected.
    #[error(transparent)]
    Market(#[from] MarketError),

    /// The engine configuration was rejected.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// JSON output could not be produced.
    #[error("serialisation failed: {0}")]
    Serialise(#[from] serde_json::Error),
}

/// Result alias used throughout the CLI.
pub type Result<T> = std::result::Result<T, CliError>;
