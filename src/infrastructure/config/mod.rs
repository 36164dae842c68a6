//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment:
//! - YAML file loading
//! - Environment variable overrides
//! - Fail-fast validation (a missing bot token stops startup)

pub mod loader;

pub use loader::{ConfigError, ConfigLoader, BOT_TOKEN_ENV};
