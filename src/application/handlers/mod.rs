//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod chat;

pub use chat::{
    ChatError, GenerateReplyHandler, GenerateReplyResult, GenerateSummaryHandler,
    GenerateSummaryResult, HistoryEntry, ListHistoryHandler, LoadConversationHandler,
    LoadConversationQuery, SendMessageCommand, SendMessageHandler, SendMessageResult,
    SUMMARY_PROMPT,
};
