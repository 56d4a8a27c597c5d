//! Configuration error types

use thiserror::Error;

/// Errors loading configuration from the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Errors from semantic validation of loaded configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required configuration value missing: {0}")]
    MissingRequired(&'static str),

    #[error("server port must be non-zero")]
    InvalidPort,

    #[error("request timeout must be between 1 and 600 seconds")]
    InvalidTimeout,

    #[error("host and port do not form a valid bind address")]
    InvalidBindAddress,

    #[error("only sqlite: database URLs are supported")]
    UnsupportedDatabaseScheme,
}
