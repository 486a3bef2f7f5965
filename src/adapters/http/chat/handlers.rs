//! HTTP handlers for chat endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Form,
};

use crate::adapters::http::middleware::{CurrentSession, SessionCookieConfig};
use crate::application::{
    ChatError, GenerateReplyHandler, GenerateSummaryHandler, ListHistoryHandler,
    LoadConversationHandler, LoadConversationQuery, SendMessageCommand, SendMessageHandler,
    SessionHandle, SessionKey, SessionRegistry,
};
use crate::domain::conversation::SessionError;
use crate::domain::foundation::SessionToken;
use crate::ports::{CompletionClient, ConversationStore};

use super::dto::{LoadChatParams, NewChatForm};
use super::fragments;

const INDEX_HTML: &str = include_str!("../../../../static/index.html");

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

/// Shared state for the chat router.
#[derive(Clone)]
pub struct ChatAppState {
    pub sessions: SessionRegistry,
    pub cookies: SessionCookieConfig,
    pub send_message: Arc<SendMessageHandler>,
    pub generate_reply: Arc<GenerateReplyHandler>,
    pub generate_summary: Arc<GenerateSummaryHandler>,
    pub list_history: Arc<ListHistoryHandler>,
    pub load_conversation: Arc<LoadConversationHandler>,
}

impl ChatAppState {
    pub fn new(store: Arc<dyn ConversationStore>, completion: Arc<dyn CompletionClient>) -> Self {
        Self {
            sessions: SessionRegistry::new(),
            cookies: SessionCookieConfig::default(),
            send_message: Arc::new(SendMessageHandler::new(store.clone())),
            generate_reply: Arc::new(GenerateReplyHandler::new(
                store.clone(),
                completion.clone(),
            )),
            generate_summary: Arc::new(GenerateSummaryHandler::new(store.clone(), completion)),
            list_history: Arc::new(ListHistoryHandler::new(store.clone())),
            load_conversation: Arc::new(LoadConversationHandler::new(store)),
        }
    }

    pub fn with_cookies(mut self, cookies: SessionCookieConfig) -> Self {
        self.cookies = cookies;
        self
    }

    /// Session that must already hold a conversation.
    async fn active_session(&self, key: SessionKey) -> Result<SessionHandle, ChatError> {
        self.sessions
            .existing(key)
            .await
            .ok_or(ChatError::Session(SessionError::NoActiveConversation))
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET / - The chat page; hands a session cookie to new browsers
pub async fn index(
    State(state): State<ChatAppState>,
    CurrentSession(key): CurrentSession,
) -> Response {
    if key != SessionKey::Shared {
        return Html(INDEX_HTML).into_response();
    }

    let token = SessionToken::new();
    match state.cookies.issue(token) {
        Some(cookie) => {
            tracing::debug!(session = %token, "Issued session cookie");
            ([(header::SET_COOKIE, cookie)], Html(INDEX_HTML)).into_response()
        }
        None => Html(INDEX_HTML).into_response(),
    }
}

/// POST /new-chat - Record a user message
pub async fn new_chat(
    State(state): State<ChatAppState>,
    CurrentSession(key): CurrentSession,
    Form(form): Form<NewChatForm>,
) -> Result<Html<String>, ChatApiError> {
    let session = state.sessions.session(key).await;
    let mut session = session.lock().await;

    let result = state
        .send_message
        .handle(&mut session, SendMessageCommand::new(form.message))
        .await?;

    Ok(Html(fragments::pending_reply(result.message.content())))
}

/// GET /get-gpt-response - Generate the assistant reply
pub async fn get_gpt_response(
    State(state): State<ChatAppState>,
    CurrentSession(key): CurrentSession,
) -> Result<Html<String>, ChatApiError> {
    let session = state.active_session(key).await?;
    let mut session = session.lock().await;

    let result = state.generate_reply.handle(&mut session).await?;

    let html = if result.summarized {
        fragments::reply(&result.reply)
    } else {
        fragments::reply_with_summary_trigger(&result.reply)
    };
    Ok(Html(html))
}

/// GET /load-history-button - Summarize the active conversation
pub async fn load_history_button(
    State(state): State<ChatAppState>,
    CurrentSession(key): CurrentSession,
) -> Result<Html<String>, ChatApiError> {
    let session = state.active_session(key).await?;
    let session = session.lock().await;

    let result = state.generate_summary.handle(&session).await?;

    Ok(Html(fragments::history_button(
        result.conversation_id,
        &result.summary,
    )))
}

/// GET /load-history-on-page-load - All summarized conversations
pub async fn load_history_on_page_load(
    State(state): State<ChatAppState>,
) -> Result<Html<String>, ChatApiError> {
    let entries = state.list_history.handle().await?;

    let html = entries
        .iter()
        .map(|e| fragments::history_button(e.conversation_id, &e.summary))
        .collect();
    Ok(Html(html))
}

/// GET /load-chat?chatId= - Reopen a stored conversation
///
/// An unknown browser is only registered once a conversation was found.
pub async fn load_chat(
    State(state): State<ChatAppState>,
    CurrentSession(key): CurrentSession,
    Query(params): Query<LoadChatParams>,
) -> Result<Html<String>, ChatApiError> {
    let (session, registered) = match state.sessions.existing(key).await {
        Some(handle) => (handle, true),
        None => (SessionRegistry::detached(), false),
    };

    let query = LoadConversationQuery {
        chat_id: params.chat_id,
    };
    let loaded = {
        let mut guard = session.lock().await;
        state.load_conversation.handle(&mut guard, query).await?
    };

    let Some(conversation) = loaded else {
        return Ok(Html(fragments::CHAT_NOT_FOUND.to_string()));
    };

    if let (false, SessionKey::Browser(token)) = (registered, key) {
        state.sessions.adopt(token, session).await;
    }
    Ok(Html(fragments::messages(&conversation.messages)))
}

/// GET /clear-chat - Detach the session from its conversation
pub async fn clear_chat(
    State(state): State<ChatAppState>,
    CurrentSession(key): CurrentSession,
) -> Html<&'static str> {
    if let Some(session) = state.sessions.existing(key).await {
        session.lock().await.clear();
        tracing::debug!(session = ?key, "Cleared chat session");
    }
    Html(fragments::EMPTY_MESSAGES)
}

/// Any unmatched path or method.
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

// ════════════════════════════════════════════════════════════════════════════
// Error mapping
// ════════════════════════════════════════════════════════════════════════════

/// HTTP-facing wrapper around [`ChatError`].
#[derive(Debug)]
pub struct ChatApiError(pub ChatError);

impl From<ChatError> for ChatApiError {
    fn from(err: ChatError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ChatApiError {
    fn into_response(self) -> Response {
        match self.0 {
            ChatError::Session(SessionError::NoActiveConversation) => {
                tracing::warn!("Chat request without an active conversation");
                (StatusCode::CONFLICT, Html(fragments::NO_ACTIVE_CHAT)).into_response()
            }
            ChatError::Provider(e) => {
                tracing::error!(error = %e, "Completion provider failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
            ChatError::Store(e) => {
                tracing::error!(error = %e, "Conversation store failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
