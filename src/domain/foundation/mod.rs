//! Foundation module - Shared domain primitives.
//!
//! Contains the identifiers that form the vocabulary of the chat domain.

mod ids;

pub use ids::{ConversationId, SessionToken};
