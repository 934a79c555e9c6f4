//! Cross-cutting domain error types.
//!
//! Persistence errors (`StoreError`) live in `todo-store` and configuration
//! errors in `todo-config`. The binary converges all of them into `anyhow`.

use thiserror::Error;

/// Errors raised by the domain mutation operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Input violates a domain invariant (empty description, unknown status).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The referenced item does not exist in the current list.
    #[error("no to-do with id {id}")]
    NotFound { id: u64 },
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
