//! Conversation module - chat messages, persisted conversations and the
//! per-session pointer to the active one.

mod conversation;
mod message;
mod session;

pub use conversation::Conversation;
pub use message::{Message, Role};
pub use session::{ChatSession, SessionError, SessionPointer};
