//! ListHistoryHandler - the entries of the history sidebar.

use std::sync::Arc;

use crate::domain::foundation::ConversationId;
use crate::ports::ConversationStore;

use super::ChatError;

/// A summarized conversation as shown in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub conversation_id: ConversationId,
    pub summary: String,
}

/// Handler for the history listing.
pub struct ListHistoryHandler {
    store: Arc<dyn ConversationStore>,
}

impl ListHistoryHandler {
    pub fn new(store: Arc<dyn ConversationStore>) -> Self {
        Self { store }
    }

    /// Conversations without a summary are left out.
    pub async fn handle(&self) -> Result<Vec<HistoryEntry>, ChatError> {
        let entries = self
            .store
            .list_all()
            .await?
            .into_iter()
            .filter_map(|c| {
                c.summary.map(|summary| HistoryEntry {
                    conversation_id: c.id,
                    summary,
                })
            })
            .collect();
        Ok(entries)
    }
}
