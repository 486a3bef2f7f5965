//! Session cookie middleware and extractor for axum.
//!
//! - `session_middleware` - reads the `chat_session` cookie and injects the
//!   matching [`SessionKey`] into request extensions
//! - `CurrentSession` - extractor that reads the key back out
//!
//! ```text
//! Request → session_middleware → injects SessionKey into extensions
//!                                      ↓
//!                              Handler → CurrentSession extractor reads it
//! ```
//!
//! A missing or unparseable cookie resolves to [`SessionKey::Shared`]. Cookies
//! are only handed out with the chat page, so clients that never load the
//! page keep using the shared session.

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request},
    http::{header, request::Parts, HeaderMap, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::application::SessionKey;
use crate::domain::foundation::SessionToken;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "chat_session";

/// Cookie attributes that vary per deployment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionCookieConfig {
    /// Adds the `Secure` attribute.
    pub secure: bool,
}

impl SessionCookieConfig {
    pub fn new(secure: bool) -> Self {
        Self { secure }
    }

    /// Renders the `Set-Cookie` value for `token`.
    pub fn set_cookie_value(&self, token: SessionToken) -> String {
        let mut value = format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax");
        if self.secure {
            value.push_str("; Secure");
        }
        value
    }

    /// `Set-Cookie` header for a freshly issued token.
    pub fn issue(&self, token: SessionToken) -> Option<HeaderValue> {
        HeaderValue::from_str(&self.set_cookie_value(token))
            .map_err(|e| tracing::error!(error = %e, "Failed to encode session cookie"))
            .ok()
    }
}

/// Resolves the session key for every request.
pub async fn session_middleware(mut request: Request, next: Next) -> Response {
    let key = match token_from_headers(request.headers()) {
        Some(token) => SessionKey::Browser(token),
        None => SessionKey::Shared,
    };

    request.extensions_mut().insert(key);
    next.run(request).await
}

/// Finds a well-formed session token among the request's cookies.
fn token_from_headers(headers: &HeaderMap) -> Option<SessionToken> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|h| h.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| value.trim().parse().ok())
}

/// Extractor for the current session key.
///
/// Only valid on routes wrapped by `session_middleware`.
#[derive(Debug, Clone, Copy)]
pub struct CurrentSession(pub SessionKey);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = SessionRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionKey>()
            .copied()
            .map(CurrentSession)
            .ok_or(SessionRejection::MissingMiddleware)
    }
}

/// Rejection when no session key was injected.
#[derive(Debug, Clone)]
pub enum SessionRejection {
    /// The route is not behind `session_middleware`.
    MissingMiddleware,
}

impl IntoResponse for SessionRejection {
    fn into_response(self) -> Response {
        match self {
            SessionRejection::MissingMiddleware => {
                tracing::error!("Session requested on a route without session middleware");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
