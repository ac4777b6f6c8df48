//! Configuration error types

use thiserror::Error;

/// Startup configuration failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationError),
}

/// A configuration value that cannot be used.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{0} must be set")]
    MissingRequired(&'static str),

    #[error("Server port must not be 0")]
    InvalidPort,

    #[error("Timeouts must be at least one second")]
    InvalidTimeout,

    #[error("Cannot listen on {0}")]
    InvalidSocketAddr(String),

    #[error("Database URL must start with postgres:// or postgresql://")]
    InvalidDatabaseUrl,

    #[error("Pool needs 1..=max_connections connections and min_connections <= max_connections")]
    InvalidPoolSize,

    #[error("Pool max_connections must not exceed {0}")]
    PoolSizeTooLarge(u32),

    #[error("AI gateway base URL must be an http(s) URL")]
    InvalidGatewayUrl,

    #[error("AI gateway base URL must use HTTPS in production")]
    GatewayMustBeHttps,

    #[error("Invalid API token list: {0}")]
    InvalidApiTokens(String),
}
