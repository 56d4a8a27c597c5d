//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `SECURITY_EXPERT`
//! prefix and `__` (double underscore) separating nested keys.
//!
//! # Example
//!
//! ```no_run
//! use security_expert::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server listening on port {}", config.server.port);
//! ```

mod ai;
mod database;
mod error;
mod server;

pub use ai::{AiConfig, ProviderKind};
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::ServerConfig;

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, timeouts)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (SQLite file)
    #[serde(default)]
    pub database: DatabaseConfig,

    /// AI provider configuration
    #[serde(default)]
    pub ai: AiConfig,
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// Reads a `.env` file first if present, then environment variables:
    ///
    /// - `SECURITY_EXPERT__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `SECURITY_EXPERT__AI__ANTHROPIC_API_KEY=...` -> `ai.anthropic_api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SECURITY_EXPERT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validates all configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.ai.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global; serialize these tests.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn set_minimal_env() {
        env::set_var("SECURITY_EXPERT__AI__ANTHROPIC_API_KEY", "sk-ant-xxx");
    }

    fn clear_env() {
        env::remove_var("SECURITY_EXPERT__AI__ANTHROPIC_API_KEY");
        env::remove_var("SECURITY_EXPERT__SERVER__PORT");
        env::remove_var("SECURITY_EXPERT__DATABASE__URL");
        env::remove_var("SECURITY_EXPERT__AI__PROVIDER");
    }

    #[test]
    fn loads_defaults_with_minimal_env() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.url, "sqlite:security_analysis.db");
    }

    #[test]
    fn validates_full_config() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn custom_port_overrides_default() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("SECURITY_EXPERT__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn custom_database_url_overrides_default() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("SECURITY_EXPERT__DATABASE__URL", "sqlite:/tmp/test.db");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.database.url, "sqlite:/tmp/test.db");
    }
}
