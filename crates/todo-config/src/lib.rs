//! # todo-config
//!
//! Layered configuration loading for the todo workspace using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TODO_*` prefix, `__` as separator)
//! 2. Project-level `./todo.toml`
//! 3. User-level `~/.config/todo/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TODO_STORE__PATH` -> `store.path`, `TODO_SERVER__ADDR` ->
//! `server.addr`, `TODO_LOG__FORMAT` -> `log.format`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use todo_config::TodoConfig;
//!
//! let config = TodoConfig::load_with_dotenv().expect("config");
//! println!("data file: {}", config.store.resolved_path().display());
//! ```

mod error;
mod log;
mod server;
mod store;

pub use error::ConfigError;
pub use log::{LogConfig, LogFormat};
pub use server::ServerConfig;
pub use store::{DEFAULT_DATA_PATH, StoreConfig, StoreKind};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file name, looked up in the current directory.
pub const PROJECT_CONFIG_FILE: &str = "todo.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TodoConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl TodoConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed, or
    /// `ConfigError::InvalidValue` if validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("TODO_").split("__"))
    }

    /// Check cross-field constraints figment cannot express.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.queue_capacity == 0 {
            return Err(ConfigError::invalid(
                "store.queue_capacity",
                "must be greater than zero",
            ));
        }
        if self.server.addr.trim().is_empty() {
            return Err(ConfigError::invalid("server.addr", "must not be empty"));
        }
        if self.log.level.trim().is_empty() {
            return Err(ConfigError::invalid("log.level", "must not be empty"));
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("todo").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = TodoConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.store.kind, StoreKind::Actor);
        assert_eq!(config.log.format, LogFormat::Json);
        assert_eq!(config.server.addr, "127.0.0.1:8080");
    }

    #[test]
    fn zero_queue_capacity_is_rejected() {
        let mut config = TodoConfig::default();
        config.store.queue_capacity = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("store.queue_capacity"));
    }

    #[test]
    fn blank_addr_is_rejected() {
        let mut config = TodoConfig::default();
        config.server.addr = "  ".into();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "server.addr"
        ));
    }
}
