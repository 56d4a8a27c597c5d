//! Anthropic provider - AiProvider implementation over the Messages API.
//!
//! Non-streaming: the report is a single completion per request. Transient
//! transport failures are retried with exponential backoff inside the
//! adapter; callers only ever see the final outcome.
//!
//! # Configuration
//!
//! ```ignore
//! let config = AnthropicConfig::new(api_key)
//!     .with_model("claude-sonnet-4-20250514");
//!
//! let provider = AnthropicProvider::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::sleep;
use tracing::warn;

use crate::ports::{
    AiError, AiProvider, CompletionRequest, CompletionResponse, FinishReason, MessageRole,
    ProviderInfo, TokenUsage,
};

/// Anthropic API version header value.
const ANTHROPIC_API_VERSION: &str = "2023-06-01";

/// Configuration for the Anthropic provider.
#[derive(Debug, Clone)]
pub struct AnthropicConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use.
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum retries on transient failures.
    pub max_retries: u32,
}

impl AnthropicConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "claude-sonnet-4-20250514".to_string(),
            base_url: "https://api.anthropic.com".to_string(),
            timeout: Duration::from_secs(120),
            max_retries: 3,
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the maximum retry count.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Anthropic Messages API provider.
pub struct AnthropicProvider {
    config: AnthropicConfig,
    client: Client,
}

impl AnthropicProvider {
    /// Creates a new provider with the given configuration.
    ///
    /// # Errors
    ///
    /// - `InvalidRequest` if the HTTP client cannot be constructed
    pub fn new(config: AnthropicConfig) -> Result<Self, AiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AiError::InvalidRequest(format!("HTTP client build failed: {}", e)))?;

        Ok(Self { config, client })
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.config.base_url)
    }

    /// Converts our request to Anthropic's wire format.
    fn to_anthropic_request(&self, request: &CompletionRequest) -> AnthropicRequest {
        let messages = request
            .messages
            .iter()
            .map(|msg| AnthropicMessage {
                role: match msg.role {
                    MessageRole::User => "user".to_string(),
                    MessageRole::Assistant => "assistant".to_string(),
                },
                content: msg.content.clone(),
            })
            .collect();

        AnthropicRequest {
            model: self.config.model.clone(),
            messages,
            system: request.system_prompt.clone(),
            max_tokens: request.max_tokens.unwrap_or(4096),
            temperature: request.temperature,
        }
    }

    async fn send_request(&self, request: &CompletionRequest) -> Result<Response, AiError> {
        let anthropic_request = self.to_anthropic_request(request);

        self.client
            .post(self.messages_url())
            .header("x-api-key", self.config.api_key())
            .header("anthropic-version", ANTHROPIC_API_VERSION)
            .header("Content-Type", "application/json")
            .json(&anthropic_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AiError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    AiError::network(format!("Connection failed: {}", e))
                } else {
                    AiError::network(e.to_string())
                }
            })
    }

    /// Maps non-success statuses onto the error taxonomy.
    async fn handle_response_status(&self, response: Response) -> Result<Response, AiError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 => Err(AiError::AuthenticationFailed),
            429 => Err(AiError::rate_limited(parse_retry_after(&error_body))),
            400 => {
                if error_body.contains("prompt is too long") {
                    Err(AiError::ContextTooLong)
                } else {
                    Err(AiError::InvalidRequest(error_body))
                }
            }
            500..=599 => Err(AiError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(AiError::network(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }

    async fn parse_response(&self, response: Response) -> Result<CompletionResponse, AiError> {
        let response = self.handle_response_status(response).await?;

        let anthropic_response: AnthropicResponse = response
            .json()
            .await
            .map_err(|e| AiError::parse(format!("Failed to parse response: {}", e)))?;

        let content = anthropic_response
            .content
            .into_iter()
            .filter_map(|block| {
                if block.block_type == "text" {
                    block.text
                } else {
                    None
                }
            })
            .collect::<Vec<_>>()
            .join("");

        let finish_reason = match anthropic_response.stop_reason.as_deref() {
            Some("end_turn") | Some("stop_sequence") => FinishReason::Stop,
            Some("max_tokens") => FinishReason::Length,
            _ => FinishReason::Stop,
        };

        Ok(CompletionResponse {
            content,
            usage: TokenUsage::new(
                anthropic_response.usage.input_tokens,
                anthropic_response.usage.output_tokens,
            ),
            model: anthropic_response.model,
            finish_reason,
        })
    }
}

/// Parses retry-after hints out of an error body.
fn parse_retry_after(error_body: &str) -> u32 {
    if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(error_body) {
        if let Some(msg) = parsed
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            if let Some(idx) = msg.find("try again in ") {
                let rest = &msg[idx + 13..];
                let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
                if let Ok(secs) = digits.parse::<u32>() {
                    return secs;
                }
            }
        }
    }
    60
}

#[async_trait]
impl AiProvider for AnthropicProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AiError> {
        let mut retry_count = 0;

        loop {
            let outcome = match self.send_request(&request).await {
                Ok(response) => self.parse_response(response).await,
                Err(err) => Err(err),
            };

            match outcome {
                Ok(completion) => return Ok(completion),
                Err(err) => {
                    if !err.is_retryable() || retry_count >= self.config.max_retries {
                        return Err(err);
                    }
                    warn!(
                        trace_id = %request.metadata.trace_id,
                        attempt = retry_count + 1,
                        error = %err,
                        "completion attempt failed, retrying"
                    );
                    // Exponential backoff: 1s, 2s, 4s, ...
                    sleep(Duration::from_secs(1 << retry_count)).await;
                    retry_count += 1;
                }
            }
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        // All current Claude models offer a 200k context window.
        ProviderInfo::new("anthropic", &self.config.model, 200_000)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Wire types
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
struct AnthropicRequest {
    model: String,
    messages: Vec<AnthropicMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<ContentBlock>,
    model: String,
    stop_reason: Option<String>,
    usage: AnthropicUsage,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AnthropicUsage {
    input_tokens: u32,
    output_tokens: u32,
}
