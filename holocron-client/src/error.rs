//! Fetch error type shared by the cache, catalog, and resolver.

use std::sync::Arc;

/// Why a remote fetch failed. Cloneable so one outcome can be handed to
/// every caller joined on the same in-flight load.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(Arc<reqwest::Error>),
    #[error("HTTP status {0}")]
    Status(u16),
    #[error("unexpected payload: {0}")]
    Payload(String),
    #[error("load interrupted before completion")]
    Interrupted,
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(Arc::new(err))
    }
}
