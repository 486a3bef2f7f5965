//! HTTP routes for chat endpoints.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::adapters::http::middleware::{session_middleware, SessionCookieConfig};

use super::handlers::{
    clear_chat, get_gpt_response, index, load_chat, load_history_button,
    load_history_on_page_load, new_chat, not_found, ChatAppState,
};

/// Chat routes without state. Wrong methods on known paths and unknown paths
/// both fall through to `not_found`.
pub fn chat_routes() -> Router<ChatAppState> {
    Router::new()
        .route("/", get(index).fallback(not_found))
        .route("/new-chat", post(new_chat).fallback(not_found))
        .route("/get-gpt-response", get(get_gpt_response).fallback(not_found))
        .route(
            "/load-history-button",
            get(load_history_button).fallback(not_found),
        )
        .route(
            "/load-history-on-page-load",
            get(load_history_on_page_load).fallback(not_found),
        )
        .route("/load-chat", get(load_chat).fallback(not_found))
        .route("/clear-chat", get(clear_chat).fallback(not_found))
        .fallback(not_found)
}

/// Complete chat application. The chat page hands out cookies built from
/// `cookies`.
pub fn chat_router(state: ChatAppState, cookies: SessionCookieConfig) -> Router {
    chat_routes()
        .layer(middleware::from_fn(session_middleware))
        .with_state(state.with_cookies(cookies))
}
