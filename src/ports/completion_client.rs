//! Completion Client Port - Interface for LLM completion providers.
//!
//! This port abstracts the call to an external chat-completion service so the
//! chat handlers can generate replies and summaries without coupling to a
//! specific provider.
//!
//! # Design
//!
//! - Non-streaming, single request per call
//! - No retry: a failure is returned to the caller as-is
//! - Provider-agnostic message format (the domain [`Message`])
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct EchoClient;
//!
//! #[async_trait]
//! impl CompletionClient for EchoClient {
//!     async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, ProviderError> {
//!         let last = request.messages.last().map(|m| m.content().to_string()).unwrap_or_default();
//!         Ok(CompletionResponse::new(last, "echo"))
//!     }
//! }
//! ```

use async_trait::async_trait;

use crate::domain::conversation::Message;

/// Port for completion provider interactions.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Generate a single completion for the given conversation.
    async fn complete(&self, request: CompletionRequest)
        -> Result<CompletionResponse, ProviderError>;
}

/// Request for a completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    /// Conversation messages, oldest first.
    pub messages: Vec<Message>,
}

impl CompletionRequest {
    /// Creates a request over the given messages.
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }
}

/// Response from a completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionResponse {
    /// Generated reply text.
    pub content: String,
    /// Model that generated the response.
    pub model: String,
    /// Token usage, when the provider reports it.
    pub usage: Option<TokenUsage>,
}

impl CompletionResponse {
    pub fn new(content: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            model: model.into(),
            usage: None,
        }
    }

    pub fn with_usage(mut self, usage: TokenUsage) -> Self {
        self.usage = Some(usage);
        self
    }
}

/// Token usage information.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl TokenUsage {
    pub fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens.saturating_add(completion_tokens),
        }
    }
}

/// Completion provider errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// API key rejected.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Provider answered with a non-success status.
    #[error("provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Failed to parse provider response.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// Provider returned no choices.
    #[error("provider returned no choices")]
    EmptyChoices,
}

impl ProviderError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }
}
