//! Chat command and query handlers.

mod error;
mod generate_reply;
mod generate_summary;
mod list_history;
mod load_conversation;
mod send_message;

pub use error::ChatError;
pub use generate_reply::{GenerateReplyHandler, GenerateReplyResult};
pub use generate_summary::{GenerateSummaryHandler, GenerateSummaryResult, SUMMARY_PROMPT};
pub use list_history::{HistoryEntry, ListHistoryHandler};
pub use load_conversation::{LoadConversationHandler, LoadConversationQuery};
pub use send_message::{SendMessageCommand, SendMessageHandler, SendMessageResult};
