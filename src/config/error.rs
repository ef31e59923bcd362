use thiserror::Error;

/// Failure to produce a usable [`AppConfig`](super::AppConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read settings from the environment: {0}")]
    Source(#[from] config::ConfigError),

    #[error("settings rejected: {0}")]
    Invalid(#[from] ValidationError),
}

/// A setting that parsed but is outside what the server accepts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} must be set")]
    MissingRequired(&'static str),

    #[error("cannot bind to {0}")]
    InvalidAddress(String),

    #[error("port 0 is not allowed")]
    InvalidPort,

    #[error("request timeout must be between 1 and 300 seconds")]
    InvalidTimeout,

    #[error("database url must use the postgres:// or postgresql:// scheme")]
    InvalidDatabaseUrl,

    #[error("min_connections is larger than max_connections")]
    InvalidPoolSize,

    #[error("max_connections is capped at 100")]
    PoolSizeTooLarge,
}

pub(super) const MAX_POOL_SIZE: u32 = 100;
