//! AI provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// AI provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Which provider backs report generation
    #[serde(default)]
    pub provider: ProviderKind,

    /// Anthropic API key
    pub anthropic_api_key: Option<String>,

    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum retries on transient failure
    #[serde(default = "default_retries")]
    pub max_retries: u32,
}

/// Provider selection
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Anthropic,
    /// Canned responses; development only
    Mock,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if an Anthropic key is present
    pub fn has_anthropic_key(&self) -> bool {
        self.anthropic_api_key
            .as_ref()
            .is_some_and(|k| !k.is_empty())
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.provider == ProviderKind::Anthropic && !self.has_anthropic_key() {
            return Err(ValidationError::MissingRequired("ANTHROPIC_API_KEY"));
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            anthropic_api_key: None,
            model: default_model(),
            timeout_secs: default_timeout(),
            max_retries: default_retries(),
        }
    }
}

fn default_model() -> String {
    "claude-sonnet-4-20250514".to_string()
}

fn default_timeout() -> u64 {
    120
}

fn default_retries() -> u32 {
    3
}
