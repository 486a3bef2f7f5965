//! HTTP adapters - htmx fragment endpoints.

pub mod chat;
pub mod middleware;

pub use chat::{chat_router, chat_routes, ChatAppState};
pub use middleware::SessionCookieConfig;
