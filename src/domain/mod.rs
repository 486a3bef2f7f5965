//! Domain layer containing the chat domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (identifiers)
//! - `conversation` - Messages, conversations and per-session state

pub mod conversation;
pub mod foundation;
