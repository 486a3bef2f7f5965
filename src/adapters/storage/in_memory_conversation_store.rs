//! In-Memory Conversation Store Adapter
//!
//! Keeps conversation documents in process memory, in creation order.
//! Useful for testing and for running the demo without a database.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::conversation::{Conversation, Message};
use crate::domain::foundation::ConversationId;
use crate::ports::{ConversationStore, StoreError};

/// In-memory storage for conversations
#[derive(Debug, Clone, Default)]
pub struct InMemoryConversationStore {
    conversations: Arc<RwLock<Vec<Conversation>>>,
}

impl InMemoryConversationStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored conversations
    pub async fn len(&self) -> usize {
        self.conversations.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.conversations.read().await.is_empty()
    }

    async fn update<F>(&self, id: ConversationId, apply: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut Conversation) + Send,
    {
        let mut conversations = self.conversations.write().await;
        let conversation = conversations
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(StoreError::NotFound(id))?;
        apply(conversation);
        Ok(())
    }
}

#[async_trait]
impl ConversationStore for InMemoryConversationStore {
    async fn create(&self, messages: Vec<Message>) -> Result<ConversationId, StoreError> {
        let id = ConversationId::new();
        self.conversations
            .write()
            .await
            .push(Conversation::new(id, messages));
        Ok(id)
    }

    async fn find_by_id(&self, id: ConversationId) -> Result<Option<Conversation>, StoreError> {
        let conversations = self.conversations.read().await;
        Ok(conversations.iter().find(|c| c.id == id).cloned())
    }

    async fn replace_messages(
        &self,
        id: ConversationId,
        messages: Vec<Message>,
    ) -> Result<(), StoreError> {
        self.update(id, move |c| c.replace_messages(messages)).await
    }

    async fn set_summary(&self, id: ConversationId, summary: &str) -> Result<(), StoreError> {
        let summary = summary.to_string();
        self.update(id, move |c| c.set_summary(summary)).await
    }

    async fn list_all(&self) -> Result<Vec<Conversation>, StoreError> {
        Ok(self.conversations.read().await.clone())
    }

    async fn has_summary(&self, id: ConversationId) -> Result<bool, StoreError> {
        let conversations = self.conversations.read().await;
        Ok(conversations
            .iter()
            .find(|c| c.id == id)
            .is_some_and(Conversation::has_summary))
    }
}
