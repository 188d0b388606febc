use thiserror::Error;

/// The acting identity lacks read or function permission.
///
/// Never recovered locally; delegates propagate it unchanged so the caller
/// can render a forbidden response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Access denied: {0}")]
pub struct AccessDenied(String);

impl AccessDenied {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}
