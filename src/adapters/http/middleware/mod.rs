//! HTTP middleware for axum.
//!
//! - `session` - Session cookie middleware and extractor

pub mod session;

pub use session::{
    session_middleware, CurrentSession, SessionCookieConfig, SessionRejection, SESSION_COOKIE,
};
