//! Error types for the collaborator contracts.

mod access;
mod store;

pub use access::AccessDenied;
pub use store::StoreError;
