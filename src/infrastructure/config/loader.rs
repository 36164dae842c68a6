use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Environment variable holding the bot token
pub const BOT_TOKEN_ENV: &str = "BOT_TOKEN";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Bot token is not set. Export {BOT_TOKEN_ENV} or set telegram.token")]
    MissingBotToken,

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Failed to extract configuration: {0}")]
    Extraction(#[from] Box<figment::Error>),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .coeffbot/config.yaml (project config)
    /// 3. .coeffbot/local.yaml (local overrides, optional)
    /// 4. Environment variables (COEFFBOT_* prefix, `__` for nesting)
    /// 5. BOT_TOKEN environment variable
    pub fn load() -> Result<Config, ConfigError> {
        let figment = Self::base()
            .merge(Yaml::file(".coeffbot/config.yaml"))
            .merge(Yaml::file(".coeffbot/local.yaml"));
        Self::finish(figment)
    }

    /// Load configuration from a specific file, still honoring environment overrides
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let figment = Self::base().merge(Yaml::file(path.as_ref()));
        Self::finish(figment)
    }

    fn base() -> Figment {
        Figment::new().merge(Serialized::defaults(Config::default()))
    }

    fn finish(figment: Figment) -> Result<Config, ConfigError> {
        let config: Config = figment
            .merge(Env::prefixed("COEFFBOT_").split("__"))
            .merge(
                Env::raw()
                    .only(&[BOT_TOKEN_ENV])
                    .map(|_| "telegram.token".into()),
            )
            .extract()
            .map_err(Box::new)?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let token = config.telegram.token.as_deref().map(str::trim);
        if token.is_none_or(str::is_empty) {
            return Err(ConfigError::MissingBotToken);
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        Ok(())
    }
}
