//! AI provider adapters.

mod anthropic;
mod mock;

pub use anthropic::{AnthropicConfig, AnthropicProvider};
pub use mock::{MockAiProvider, MockFailure};
