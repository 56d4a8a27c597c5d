//! Database configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Database configuration (SQLite)
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite connection URL, e.g. `sqlite:security_analysis.db`
    #[serde(default = "default_url")]
    pub url: String,
}

impl DatabaseConfig {
    /// Validate database configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.trim().is_empty() {
            return Err(ValidationError::MissingRequired("DATABASE_URL"));
        }
        if !self.url.starts_with("sqlite:") {
            return Err(ValidationError::UnsupportedDatabaseScheme);
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { url: default_url() }
    }
}

fn default_url() -> String {
    "sqlite:security_analysis.db".to_string()
}
