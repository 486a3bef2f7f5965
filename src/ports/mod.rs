//! Ports - Interfaces to the external collaborators.
//!
//! - `CompletionClient` - LLM completion service
//! - `ConversationStore` - conversation document persistence

mod completion_client;
mod conversation_store;

pub use completion_client::{
    CompletionClient, CompletionRequest, CompletionResponse, ProviderError, TokenUsage,
};
pub use conversation_store::{ConversationStore, StoreError};
