//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid socket address: {0}")]
    InvalidSocketAddr(String),

    #[error("Invalid request timeout (must be 1-300 seconds)")]
    InvalidTimeout,

    #[error("Invalid AI timeout (must be 1-120 seconds)")]
    InvalidAiTimeout,

    #[error("Invalid AI temperature (must be 0.0-2.0)")]
    InvalidTemperature,

    #[error("Invalid AI max_tokens (must be positive)")]
    InvalidMaxTokens,

    #[error("At least one of wizard or assistant must be enabled")]
    NoModeEnabled,
}
