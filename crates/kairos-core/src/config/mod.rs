use anyhow::Result;
use config::{Config, Environment};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;

use crate::error::CoreError;

/// Default ceiling on occurrences produced by a single expansion.
pub const DEFAULT_MAX_INSTANCES: usize = 100_000;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub expansion: ExpansionConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpansionConfig {
    pub max_instances: usize,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            max_instances: DEFAULT_MAX_INSTANCES,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl LoggingConfig {
    /// ## Summary
    /// Parses `level` (`off`, `error`, `warn`, `info`, `debug`, `trace`) into
    /// a filter for the caller's subscriber.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` if the level name is unknown.
    pub fn level_filter(&self) -> Result<LevelFilter, CoreError> {
        self.level
            .parse()
            .map_err(|e| CoreError::ConfigError(format!("logging.level {:?}: {e}", self.level)))
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from an optional `config.toml` and environment
    /// variables into `Settings`. Environment variables win.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it
    /// fails, or if the resulting values are unusable.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::environment())
    }

    /// Variables prefixed `KAIROS__`, with `__` between key segments
    /// (`KAIROS__EXPANSION__MAX_INSTANCES`).
    fn environment() -> Environment {
        Environment::with_prefix("KAIROS")
            .separator("__")
            .ignore_empty(true)
            .try_parsing(true)
    }

    fn load_from(environment: Environment) -> Result<Self> {
        let settings = Config::builder()
            .set_default(
                "expansion.max_instances",
                i64::try_from(DEFAULT_MAX_INSTANCES)?,
            )?
            .set_default("logging.level", "info")?
            .add_source(config::File::with_name("config.toml").required(false))
            .add_source(environment)
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Checks values that deserialize fine but cannot be used.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` if `expansion.max_instances` is zero
    /// or `logging.level` is not a level name.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.expansion.max_instances == 0 {
            return Err(CoreError::ConfigError(
                "expansion.max_instances must be at least 1".to_string(),
            ));
        }
        self.logging.level_filter()?;
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(
        max_instances = settings.expansion.max_instances,
        level = %settings.logging.level_filter()?,
        "Configuration loaded"
    );
    Ok(settings)
}
