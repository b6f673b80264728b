//! Configuration error types

use thiserror::Error;

/// Errors raised while loading notifier configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required configuration file is missing
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration could not be deserialized
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(String),

    /// Generic configuration error from the config crate
    #[error("Configuration error: {0}")]
    Other(#[from] config::ConfigError),
}
