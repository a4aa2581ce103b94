//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DECREE_DESK` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use decree_desk::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Writing decrees to {}", config.storage.output_dir.display());
//! ```

mod database;
mod error;
mod issuance;
mod logging;
mod storage;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use issuance::IssuanceConfig;
pub use logging::LoggingConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

use crate::application::IssuanceSettings;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Identifier codes and validity policy
    pub issuance: IssuanceConfig,

    /// Template and artifact locations
    #[serde(default)]
    pub storage: StorageConfig,

    /// PostgreSQL connection; the CLI refuses to issue without one
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DECREE_DESK` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DECREE_DESK__ISSUANCE__TIER=PC` -> `issuance.tier = "PC"`
    /// - `DECREE_DESK__DATABASE__URL=...` -> `database.url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DECREE_DESK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.issuance.validate()?;
        self.storage.validate()?;
        self.database.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Issuance parameters for the decree handler
    pub fn issuance_settings(&self) -> Result<IssuanceSettings, ValidationError> {
        self.issuance.validate()?;
        Ok(IssuanceSettings {
            codes: self.issuance.codes()?,
            validity_years: self.issuance.validity_years,
            utc_offset: self.issuance.utc_offset()?,
        })
    }
}
