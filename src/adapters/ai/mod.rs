//! Completion client adapters.
//!
//! Implementations of the CompletionClient port.
//!
//! ## Available Adapters
//!
//! - `OpenAIProvider` - OpenAI chat-completions API
//! - `MockCompletionClient` - Configurable mock for testing

mod mock_provider;
mod openai_provider;

pub use mock_provider::MockCompletionClient;
pub use openai_provider::{OpenAIConfig, OpenAIProvider};
