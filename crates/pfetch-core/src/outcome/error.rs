//! Per-task failure taxonomy.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Why a request did not produce an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Connect or total request timeout elapsed.
    #[error("timeout: {0}")]
    Timeout(String),
    /// DNS, connect, reset or empty reply.
    #[error("connection failed: {0}")]
    Connection(String),
    /// Any other client-side failure (TLS, protocol, ...).
    #[error("{0}")]
    Other(String),
}

/// Failure of a single download task. Never escapes `fetch_all`; it is
/// recorded in the task's [`FetchResult`](super::FetchResult).
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
    #[error("HTTP {status}")]
    Http { status: u32 },
    #[error("storage error at {}: {source}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::InvalidUrl { .. } => FetchErrorKind::InvalidUrl,
            FetchError::Transport(_) => FetchErrorKind::Transport,
            FetchError::Http { .. } => FetchErrorKind::Http,
            FetchError::Storage { .. } => FetchErrorKind::Storage,
        }
    }

    pub(crate) fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FetchError::Storage {
            path: path.into(),
            source,
        }
    }
}

/// Serializable tag of a [`FetchError`], as stored in batch reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchErrorKind {
    InvalidUrl,
    Transport,
    Http,
    Storage,
}
