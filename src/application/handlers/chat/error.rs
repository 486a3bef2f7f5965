//! Errors shared by the chat command and query handlers.

use thiserror::Error;

use crate::domain::conversation::SessionError;
use crate::ports::{ProviderError, StoreError};

/// Anything that can go wrong while handling a chat request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("completion provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("conversation store error: {0}")]
    Store(#[from] StoreError),
}
