//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Completion clients (OpenAI, mock)
//! - `http` - axum router, session middleware, HTML fragments
//! - `postgres` - PostgreSQL conversation store
//! - `storage` - In-memory conversation store

pub mod ai;
pub mod http;
pub mod postgres;
pub mod storage;
