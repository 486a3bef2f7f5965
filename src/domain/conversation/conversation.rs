//! Conversation record.
//!
//! A persisted, ordered list of chat messages plus an optional short summary.
//! The summary is filled in lazily after the first assistant reply and is what
//! the history sidebar shows as the button label.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Message;
use crate::domain::foundation::ConversationId;

/// A conversation as loaded from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: ConversationId,
    pub messages: Vec<Message>,
    pub summary: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    /// Creates a fresh conversation with no summary.
    pub fn new(id: ConversationId, messages: Vec<Message>) -> Self {
        let now = Utc::now();
        Self {
            id,
            messages,
            summary: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// True once a summary has been recorded, even an empty one.
    pub fn has_summary(&self) -> bool {
        self.summary.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Replaces the whole message list.
    pub fn replace_messages(&mut self, messages: Vec<Message>) {
        self.messages = messages;
        self.updated_at = Utc::now();
    }

    pub fn set_summary(&mut self, summary: impl Into<String>) {
        self.summary = Some(summary.into());
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_conversation_has_no_summary() {
        let conversation = Conversation::new(ConversationId::new(), vec![Message::user("Hello")]);
        assert!(!conversation.has_summary());
        assert!(!conversation.is_empty());
        assert_eq!(conversation.created_at, conversation.updated_at);
    }

    #[test]
    fn replace_messages_overwrites_everything() {
        let mut conversation =
            Conversation::new(ConversationId::new(), vec![Message::user("first")]);
        conversation.replace_messages(vec![Message::user("a"), Message::assistant("b")]);

        assert_eq!(
            conversation.messages,
            vec![Message::user("a"), Message::assistant("b")]
        );
        assert!(conversation.updated_at >= conversation.created_at);
    }

    #[test]
    fn empty_summary_still_counts() {
        let mut conversation = Conversation::new(ConversationId::new(), vec![]);
        conversation.set_summary("");
        assert!(conversation.has_summary());
    }
}
