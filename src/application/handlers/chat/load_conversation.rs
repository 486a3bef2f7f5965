//! LoadConversationHandler - reopens a stored conversation in the session.

use std::sync::Arc;

use crate::domain::conversation::{ChatSession, Conversation};
use crate::domain::foundation::ConversationId;
use crate::ports::ConversationStore;

use super::ChatError;

/// Query naming the conversation to load, exactly as received.
#[derive(Debug, Clone)]
pub struct LoadConversationQuery {
    pub chat_id: Option<String>,
}

/// Handler for loading a conversation into the session.
pub struct LoadConversationHandler {
    store: Arc<dyn ConversationStore>,
}

impl LoadConversationHandler {
    pub fn new(store: Arc<dyn ConversationStore>) -> Self {
        Self { store }
    }

    /// Returns `None` for a missing, malformed, unknown or empty conversation,
    /// in which case the session is left as it was.
    pub async fn handle(
        &self,
        session: &mut ChatSession,
        query: LoadConversationQuery,
    ) -> Result<Option<Conversation>, ChatError> {
        let Some(id) = query
            .chat_id
            .as_deref()
            .and_then(|raw| raw.parse::<ConversationId>().ok())
        else {
            tracing::debug!(chat_id = ?query.chat_id, "Ignoring unparseable chat id");
            return Ok(None);
        };

        let conversation = match self.store.find_by_id(id).await? {
            Some(c) if !c.is_empty() => c,
            _ => return Ok(None),
        };

        session.resume(id, conversation.messages.clone());
        tracing::debug!(conversation_id = %id, "Loaded conversation into session");
        Ok(Some(conversation))
    }
}
