//! PostgreSQL adapters - Database implementations for store ports.
//!
//! - `PostgresConversationStore` - Conversation documents in a JSONB column

mod conversation_store;

pub use conversation_store::PostgresConversationStore;
