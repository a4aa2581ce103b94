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

    #[error("Invalid issuance code: {0}")]
    InvalidIssuanceCode(String),

    #[error("Validity must be between 1 and 25 years")]
    InvalidValidityYears,

    #[error("UTC offset must be between -12 and +14 hours")]
    InvalidUtcOffset,

    #[error("Maximum artifact size must be positive")]
    InvalidMaxArtifactSize,

    #[error("Public base URL must use http or https")]
    InvalidPublicBaseUrl,

    #[error("A database is required: set DECREE_DESK__DATABASE__URL (in-memory counters restart at 001 on every run)")]
    DatabaseRequired,

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Pool min_connections exceeds max_connections")]
    InvalidPoolSize,

    #[error("Pool size exceeds maximum allowed (100)")]
    PoolSizeTooLarge,

    #[error("Log filter must not be empty")]
    EmptyLogFilter,
}
