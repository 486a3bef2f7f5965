//! Chat HTTP adapter.
//!
//! Serves the chat page and the htmx fragment endpoints.
//!
//! # Endpoints
//!
//! - `GET /` - Chat page
//! - `POST /new-chat` - Record a user message
//! - `GET /get-gpt-response` - Assistant reply for the active conversation
//! - `GET /load-history-button` - Summarize the active conversation
//! - `GET /load-history-on-page-load` - Summarized conversations
//! - `GET /load-chat?chatId=` - Reopen a conversation
//! - `GET /clear-chat` - Detach from the active conversation

mod dto;
pub mod fragments;
mod handlers;
mod routes;

pub use dto::{LoadChatParams, NewChatForm};
pub use handlers::{ChatApiError, ChatAppState};
pub use routes::{chat_router, chat_routes};
