//! Error types for the valuekit CLI.

use thiserror::Error;
use valuekit_core::types::RangeError;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Random range error
    #[error("Range error: {0}")]
    Range(#[from] RangeError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
