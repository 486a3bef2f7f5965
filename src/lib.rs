//! Chat Relay - htmx chat front end backed by an LLM completion API
//!
//! Relays user messages to a chat-completion service, persists each
//! conversation as a document, and answers with HTML fragments.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
