//! Storage Adapters
//!
//! Process-local implementation of the ConversationStore port.
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::InMemoryConversationStore;
//!
//! let store = InMemoryConversationStore::new();
//! ```

mod in_memory_conversation_store;

pub use in_memory_conversation_store::InMemoryConversationStore;
