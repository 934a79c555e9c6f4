//! Persistence error types for todo-store.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading or saving the to-do list.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem read or write failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data file is not a valid JSON array of items.
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The list could not be serialized.
    #[error("failed to encode to-do list: {0}")]
    Encode(#[source] serde_json::Error),

    /// The caller's cancellation fired before the store serviced the request.
    #[error("request cancelled before the store serviced it")]
    Cancelled,

    /// The store worker has shut down.
    #[error("store is closed")]
    Closed,

    /// A background task panicked or was aborted.
    #[error("store worker failed: {0}")]
    Worker(String),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
