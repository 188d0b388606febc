use thiserror::Error;

/// Errors from the fact/object store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The storage backend failed (connection, IO, serialization).
    #[error("Backend error: {0}")]
    Backend(String),

    /// A referenced record does not exist in the store.
    #[error("Record not found: {0}")]
    NotFound(String),
}

impl StoreError {
    /// Create a backend error.
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    /// Create a not-found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}
