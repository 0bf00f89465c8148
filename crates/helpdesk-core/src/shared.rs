//! Shared types used across the helpdesk crates.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Dataset file read when no path is configured.
pub const DEFAULT_DATA_PATH: &str = "data.json";

/// Global application configuration (gateway + chat). Load from TOML or env.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Display name (e.g. "College Helpdesk").
    pub app_name: String,
    /// Bind address for the gateway.
    pub host: String,
    /// HTTP port for the gateway.
    pub port: u16,
    /// Path to the JSON dataset read once at startup.
    pub data_path: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            app_name: "College Helpdesk".to_string(),
            host: "127.0.0.1".to_string(),
            port: 8000,
            data_path: DEFAULT_DATA_PATH.to_string(),
        }
    }
}

impl CoreConfig {
    /// Load config from file and environment. Precedence: env `HELPDESK__*` > file
    /// (`HELPDESK_CONFIG` path, default `config/helpdesk`) > defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("HELPDESK_CONFIG").unwrap_or_else(|_| "config/helpdesk".to_string());
        Self::load_from(&config_path)
    }

    /// Same as [`CoreConfig::load`] with an explicit file path (missing file is allowed).
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        let builder = config::Config::builder()
            .set_default("app_name", defaults.app_name)?
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("data_path", defaults.data_path)?;

        // `config/helpdesk` resolves to `config/helpdesk.toml` through the format-aware source.
        let path = Path::new(config_path);
        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else {
            builder.add_source(config::File::with_name(config_path).required(false))
        };

        let built = builder
            .add_source(config::Environment::with_prefix("HELPDESK").separator("__"))
            .build()?;

        built.try_deserialize()
    }

    /// `host:port` string for binding the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
