//! Error types for the graph adapter layer.

use factbase_repository::errors::StoreError;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised by graph adapters and their collaborators.
#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    /// A vertex or edge was built without one of its required fields. This
    /// is a programmer error and fails construction immediately; no
    /// partially-initialized adapter is handed out.
    #[error("Graph adapter is missing required field: {0}")]
    IncompleteAdapter(&'static str),

    /// A record references a type that cannot be resolved.
    #[error("Cannot resolve type {0}")]
    UnresolvedType(Uuid),

    /// A typed value was requested for a key with no matching property.
    /// Fails the single call only; the adapter and its cache stay valid.
    #[error("No property with key '{0}' present")]
    PropertyNotPresent(String),

    /// The underlying store failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
