//! GenerateSummaryHandler - produces the short label shown in the history
//! sidebar and stores it on the conversation.

use std::sync::Arc;

use crate::domain::conversation::{ChatSession, Message};
use crate::domain::foundation::ConversationId;
use crate::ports::{CompletionClient, CompletionRequest, ConversationStore};

use super::ChatError;

/// Instruction appended to the conversation when asking for a summary.
pub const SUMMARY_PROMPT: &str = "Summarize this conversation in maximum of 3 word sentence generally describing what the conversation is about";

/// Result of summarizing a conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummaryResult {
    pub conversation_id: ConversationId,
    pub summary: String,
}

/// Handler for conversation summaries.
pub struct GenerateSummaryHandler {
    store: Arc<dyn ConversationStore>,
    completion: Arc<dyn CompletionClient>,
}

impl GenerateSummaryHandler {
    pub fn new(store: Arc<dyn ConversationStore>, completion: Arc<dyn CompletionClient>) -> Self {
        Self { store, completion }
    }

    /// The prompt message is only sent to the provider; it is neither cached
    /// in the session nor persisted.
    pub async fn handle(&self, session: &ChatSession) -> Result<GenerateSummaryResult, ChatError> {
        let id = session.require_active()?;

        let mut messages = session.messages().to_vec();
        messages.push(Message::user(SUMMARY_PROMPT));

        let response = self
            .completion
            .complete(CompletionRequest::new(messages))
            .await?;
        let summary = clean_summary(&response.content);

        self.store.set_summary(id, &summary).await?;
        tracing::info!(conversation_id = %id, summary = %summary, "Stored conversation summary");

        Ok(GenerateSummaryResult {
            conversation_id: id,
            summary,
        })
    }
}

/// Models like to wrap short answers in quotes.
fn clean_summary(raw: &str) -> String {
    raw.trim().trim_matches('"').trim().to_string()
}
