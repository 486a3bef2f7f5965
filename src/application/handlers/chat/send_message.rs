//! SendMessageHandler - records a user message in the session's conversation.
//!
//! Starts a new conversation when the session has none, otherwise appends to
//! the active one. The store is written before the session cache so a failed
//! write leaves the session untouched.

use std::sync::Arc;

use crate::domain::conversation::{ChatSession, Message};
use crate::domain::foundation::ConversationId;
use crate::ports::ConversationStore;

use super::ChatError;

/// Command to send a user message.
#[derive(Debug, Clone)]
pub struct SendMessageCommand {
    pub content: String,
}

impl SendMessageCommand {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Result of recording a user message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessageResult {
    pub conversation_id: ConversationId,
    /// True when this message created the conversation.
    pub started_new: bool,
    pub message: Message,
}

/// Handler for user messages.
pub struct SendMessageHandler {
    store: Arc<dyn ConversationStore>,
}

impl SendMessageHandler {
    pub fn new(store: Arc<dyn ConversationStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        session: &mut ChatSession,
        cmd: SendMessageCommand,
    ) -> Result<SendMessageResult, ChatError> {
        let message = Message::user(cmd.content);

        if let Some(id) = session.active_conversation() {
            match self.store.find_by_id(id).await? {
                Some(conversation) => {
                    let mut messages = conversation.messages;
                    messages.push(message.clone());
                    self.store.replace_messages(id, messages.clone()).await?;
                    session.resume(id, messages);

                    tracing::debug!(conversation_id = %id, "Appended user message");
                    return Ok(SendMessageResult {
                        conversation_id: id,
                        started_new: false,
                        message,
                    });
                }
                None => {
                    tracing::warn!(
                        conversation_id = %id,
                        "Active conversation missing from store, starting a new one"
                    );
                }
            }
        }

        let id = self.store.create(vec![message.clone()]).await?;
        session.start(id, vec![message.clone()]);

        tracing::info!(conversation_id = %id, "Started conversation");
        Ok(SendMessageResult {
            conversation_id: id,
            started_new: true,
            message,
        })
    }
}
