//! # Factbase Shared
//!
//! Record and value types shared across the factbase platform crates.
//! Records are immutable views of stored data; they are created by the
//! storage layer and never mutated in place by consumers.

pub mod types;

pub use types::{
    AccessMode, FactAclEntryRecord, FactCommentRecord, FactRecord, FactTypeStruct, ObjectRecord,
    ObjectTypeStruct, PropertyEntry, PropertyValue, Subject,
};
