//! Per-browser chat session state.
//!
//! A session points at (at most) one active conversation and caches its
//! message list so reply and summary requests do not need a store round trip.
//!
//! ```text
//!   NoActiveConversation ──start/resume──▶ ActiveConversation(id)
//!            ▲                                     │
//!            └───────────────clear─────────────────┘
//! ```
//!
//! `start`/`resume` are also valid from `ActiveConversation`; they simply
//! repoint the session.

use thiserror::Error;

use super::Message;
use crate::domain::foundation::ConversationId;

/// Which conversation, if any, the session is currently attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPointer {
    #[default]
    NoActiveConversation,
    ActiveConversation(ConversationId),
}

/// Errors raised by operations that need an active conversation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no active conversation in this session")]
    NoActiveConversation,
}

/// Mutable state for a single browser session.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    pointer: SessionPointer,
    messages: Vec<Message>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer(&self) -> SessionPointer {
        self.pointer
    }

    pub fn active_conversation(&self) -> Option<ConversationId> {
        match self.pointer {
            SessionPointer::ActiveConversation(id) => Some(id),
            SessionPointer::NoActiveConversation => None,
        }
    }

    /// Returns the active conversation or fails with `NoActiveConversation`.
    pub fn require_active(&self) -> Result<ConversationId, SessionError> {
        self.active_conversation()
            .ok_or(SessionError::NoActiveConversation)
    }

    /// Cached messages of the active conversation, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Attaches a newly created conversation.
    pub fn start(&mut self, id: ConversationId, messages: Vec<Message>) {
        self.attach(id, messages);
    }

    /// Attaches an existing conversation loaded from the store.
    pub fn resume(&mut self, id: ConversationId, messages: Vec<Message>) {
        self.attach(id, messages);
    }

    /// Appends a message to the cache of the active conversation.
    pub fn record(&mut self, message: Message) -> Result<ConversationId, SessionError> {
        let id = self.require_active()?;
        self.messages.push(message);
        Ok(id)
    }

    /// Detaches from any conversation and drops the cache.
    pub fn clear(&mut self) {
        self.pointer = SessionPointer::NoActiveConversation;
        self.messages.clear();
    }

    fn attach(&mut self, id: ConversationId, messages: Vec<Message>) {
        self.pointer = SessionPointer::ActiveConversation(id);
        self.messages = messages;
    }
}
