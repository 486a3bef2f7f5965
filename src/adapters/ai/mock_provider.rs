//! Mock completion client for testing.
//!
//! Provides a configurable mock implementation of the CompletionClient port,
//! allowing tests to run without calling a real completion API.
//!
//! # Features
//!
//! - Pre-configured responses (consumed in order)
//! - Error injection
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let client = MockCompletionClient::new()
//!     .with_response("Hello, I'm the assistant!")
//!     .with_error(ProviderError::EmptyChoices);
//!
//! let response = client.complete(request).await?;
//! assert_eq!(response.content, "Hello, I'm the assistant!");
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{
    CompletionClient, CompletionRequest, CompletionResponse, ProviderError, TokenUsage,
};

/// Mock completion client for testing.
#[derive(Debug, Clone, Default)]
pub struct MockCompletionClient {
    /// Pre-configured responses (consumed in order).
    responses: Arc<Mutex<VecDeque<Result<String, ProviderError>>>>,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockCompletionClient {
    /// Creates a new mock client that answers "Mock response" by default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a successful response to the queue.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.push(Ok(content.into()));
        self
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: ProviderError) -> Self {
        self.push(Err(error));
        self
    }

    /// Queues a response on a shared handle.
    pub fn push(&self, response: Result<String, ProviderError>) {
        self.lock_responses().push_back(response);
    }

    /// Returns the number of calls made to this client.
    pub fn call_count(&self) -> usize {
        self.lock_calls().len()
    }

    /// Returns the most recent call, if any.
    pub fn last_call(&self) -> Option<CompletionRequest> {
        self.lock_calls().last().cloned()
    }

    fn next_response(&self) -> Result<String, ProviderError> {
        self.lock_responses()
            .pop_front()
            .unwrap_or_else(|| Ok("Mock response".to_string()))
    }

    // Poisoning only happens if a test panicked mid-call; keep serving.
    fn lock_responses(
        &self,
    ) -> std::sync::MutexGuard<'_, VecDeque<Result<String, ProviderError>>> {
        self.responses.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn lock_calls(&self) -> std::sync::MutexGuard<'_, Vec<CompletionRequest>> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, ProviderError> {
        self.lock_calls().push(request);

        let content = self.next_response()?;
        Ok(CompletionResponse::new(content, "mock-model-1").with_usage(TokenUsage::new(10, 20)))
    }
}
