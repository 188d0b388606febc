//! # Factbase Repository
//!
//! Collaborator contracts consumed by the graph adapter and the delegate
//! layer: the fact/object store, subject resolution, and the per-request
//! security context. Includes an in-memory store implementation used by
//! integration tests and embedding services.

pub mod errors;
pub mod interfaces;
pub mod memory;

pub use errors::{AccessDenied, StoreError};
pub use interfaces::{FactFunction, ObjectFactStore, SecurityContext, SubjectResolver};
pub use memory::MemoryStore;
