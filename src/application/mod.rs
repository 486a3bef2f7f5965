//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Session state is owned by the [`SessionRegistry`]; handlers receive the
//! session they operate on explicitly.

pub mod handlers;
mod session_registry;

pub use handlers::{
    ChatError, GenerateReplyHandler, GenerateReplyResult, GenerateSummaryHandler,
    GenerateSummaryResult, HistoryEntry, ListHistoryHandler, LoadConversationHandler,
    LoadConversationQuery, SendMessageCommand, SendMessageHandler, SendMessageResult,
    SUMMARY_PROMPT,
};
pub use session_registry::{SessionHandle, SessionKey, SessionRegistry};
