//! CLI error types.

use growth_core::types::EstimationError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `growth` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// The estimator rejected its input.
    #[error("Estimation failed: {0}")]
    Estimation(#[from] EstimationError),

    /// Configuration could not be loaded or validated.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A command-line argument was rejected after parsing.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON rendering failed.
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
