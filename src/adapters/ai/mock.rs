//! Mock AI provider for testing.
//!
//! Returns pre-configured responses in order, can inject failures, and
//! records every request for verification.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{
    AiError, AiProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};

/// Mock AI provider.
///
/// Responses are consumed in queue order; an exhausted queue yields an
/// `Unavailable` error so tests fail loudly on unexpected extra calls.
#[derive(Debug, Clone)]
pub struct MockAiProvider {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
    info: ProviderInfo,
}

#[derive(Debug, Clone)]
enum MockReply {
    Success { content: String },
    Failure(MockFailure),
}

/// Failure modes the mock can inject.
#[derive(Debug, Clone)]
pub enum MockFailure {
    RateLimited { retry_after_secs: u32 },
    Unavailable { message: String },
    AuthenticationFailed,
    Network { message: String },
    Timeout { timeout_secs: u32 },
}

impl From<MockFailure> for AiError {
    fn from(failure: MockFailure) -> Self {
        match failure {
            MockFailure::RateLimited { retry_after_secs } => AiError::rate_limited(retry_after_secs),
            MockFailure::Unavailable { message } => AiError::unavailable(message),
            MockFailure::AuthenticationFailed => AiError::AuthenticationFailed,
            MockFailure::Network { message } => AiError::network(message),
            MockFailure::Timeout { timeout_secs } => AiError::Timeout { timeout_secs },
        }
    }
}

impl Default for MockAiProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAiProvider {
    /// Creates a mock with an empty response queue.
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            info: ProviderInfo::new("mock", "mock-model-1", 128_000),
        }
    }

    /// Queues a successful response.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.replies.lock().unwrap().push_back(MockReply::Success {
            content: content.into(),
        });
        self
    }

    /// Queues a failure.
    pub fn with_failure(self, failure: MockFailure) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Failure(failure));
        self
    }

    /// Returns the recorded requests, in call order.
    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AiError> {
        self.calls.lock().unwrap().push(request);

        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(MockReply::Success { content }) => Ok(CompletionResponse {
                content,
                usage: TokenUsage::new(10, 20),
                model: self.info.model.clone(),
                finish_reason: FinishReason::Stop,
            }),
            Some(MockReply::Failure(failure)) => Err(failure.into()),
            None => Err(AiError::unavailable("mock response queue exhausted")),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        self.info.clone()
    }
}
