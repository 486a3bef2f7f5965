//! Conversation store port.
//!
//! Defines the contract for persisting and retrieving conversations as
//! documents: one record per conversation holding the ordered message list and
//! an optional summary.
//!
//! # Design
//!
//! - **Replace-all**: message lists are always written whole, never patched
//! - **Last writer wins**: no transactions or optimistic concurrency
//! - **No deletion**: conversations live for as long as the store does

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::conversation::{Conversation, Message};
use crate::domain::foundation::ConversationId;

/// Store port for conversation documents.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Persist a new conversation and return its identifier.
    async fn create(&self, messages: Vec<Message>) -> Result<ConversationId, StoreError>;

    /// Find a conversation by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: ConversationId) -> Result<Option<Conversation>, StoreError>;

    /// Overwrite the full message list of a conversation.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the conversation doesn't exist
    async fn replace_messages(
        &self,
        id: ConversationId,
        messages: Vec<Message>,
    ) -> Result<(), StoreError>;

    /// Record the summary of a conversation.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the conversation doesn't exist
    async fn set_summary(&self, id: ConversationId, summary: &str) -> Result<(), StoreError>;

    /// All conversations, oldest first.
    async fn list_all(&self) -> Result<Vec<Conversation>, StoreError>;

    /// Whether a summary has been recorded. Unknown ids report `false`.
    async fn has_summary(&self, id: ConversationId) -> Result<bool, StoreError>;
}

/// Errors from conversation store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("conversation not found: {0}")]
    NotFound(ConversationId),

    #[error("database error: {0}")]
    Database(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl StoreError {
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }
}
