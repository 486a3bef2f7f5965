//! GenerateReplyHandler - asks the completion service for the assistant's
//! next message and persists it.

use std::sync::Arc;

use crate::domain::conversation::{ChatSession, Message};
use crate::domain::foundation::ConversationId;
use crate::ports::{CompletionClient, CompletionRequest, ConversationStore};

use super::ChatError;

/// Result of generating an assistant reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReplyResult {
    pub conversation_id: ConversationId,
    pub reply: String,
    /// Whether the conversation already has a summary. When false the
    /// front end should request one.
    pub summarized: bool,
}

/// Handler for assistant replies.
pub struct GenerateReplyHandler {
    store: Arc<dyn ConversationStore>,
    completion: Arc<dyn CompletionClient>,
}

impl GenerateReplyHandler {
    pub fn new(store: Arc<dyn ConversationStore>, completion: Arc<dyn CompletionClient>) -> Self {
        Self { store, completion }
    }

    pub async fn handle(&self, session: &mut ChatSession) -> Result<GenerateReplyResult, ChatError> {
        let id = session.require_active()?;

        let response = self
            .completion
            .complete(CompletionRequest::new(session.messages().to_vec()))
            .await?;

        let reply = Message::assistant(response.content);
        let mut messages = session.messages().to_vec();
        messages.push(reply.clone());
        self.store.replace_messages(id, messages).await?;
        session.record(reply.clone())?;

        let summarized = self.store.has_summary(id).await?;
        tracing::debug!(conversation_id = %id, summarized, "Stored assistant reply");

        Ok(GenerateReplyResult {
            conversation_id: id,
            reply: reply.content().to_string(),
            summarized,
        })
    }
}
