//! Registry of live chat sessions.
//!
//! Browsers that carry a session cookie get their own [`ChatSession`].
//! Requests without one all share a single process-wide session, so clients
//! that do not keep cookies still see one continuous conversation.
//!
//! Each session sits behind its own async mutex. HTTP handlers hold the lock
//! for the whole request so two requests of one session run one after the
//! other, while different sessions never contend.
//!
//! Browser entries are only created by operations that attach a
//! conversation. Lookups for replies, summaries and clears never insert.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::domain::conversation::ChatSession;
use crate::domain::foundation::SessionToken;

/// Shared, lockable handle to one session's state.
pub type SessionHandle = Arc<Mutex<ChatSession>>;

/// Which session a request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKey {
    /// No session cookie: the process-wide default session.
    Shared,
    /// A browser identified by its session cookie.
    Browser(SessionToken),
}

/// Process-local map of session keys to session state.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    shared: SessionHandle,
    browsers: Arc<RwLock<HashMap<SessionToken, SessionHandle>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session not (yet) tracked by any registry.
    pub fn detached() -> SessionHandle {
        Arc::new(Mutex::new(ChatSession::new()))
    }

    /// Returns the session for `key`, registering an empty one if needed.
    pub async fn session(&self, key: SessionKey) -> SessionHandle {
        let token = match key {
            SessionKey::Shared => return self.shared.clone(),
            SessionKey::Browser(token) => token,
        };

        if let Some(handle) = self.browsers.read().await.get(&token) {
            return handle.clone();
        }
        self.adopt(token, Self::detached()).await
    }

    /// Returns the session for `key` if one exists. The shared session
    /// always exists.
    pub async fn existing(&self, key: SessionKey) -> Option<SessionHandle> {
        match key {
            SessionKey::Shared => Some(self.shared.clone()),
            SessionKey::Browser(token) => self.browsers.read().await.get(&token).cloned(),
        }
    }

    /// Registers `handle` for `token` unless another request got there
    /// first; returns whichever handle is now registered.
    pub async fn adopt(&self, token: SessionToken, handle: SessionHandle) -> SessionHandle {
        let mut browsers = self.browsers.write().await;
        browsers
            .entry(token)
            .or_insert_with(|| {
                tracing::debug!(session = %token, "Registered chat session");
                handle
            })
            .clone()
    }

    /// Number of browser sessions registered. The shared session is not
    /// counted.
    pub async fn len(&self) -> usize {
        self.browsers.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.browsers.read().await.is_empty()
    }
}
