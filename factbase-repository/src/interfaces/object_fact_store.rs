//! This module defines the `ObjectFactStore` trait, the interface to the
//! underlying fact/object persistence layer. It abstracts type metadata
//! lookup, fact retrieval, meta-fact enumeration, and the append-only
//! mutations for ACL entries and comments.

use async_trait::async_trait;
use factbase_shared::types::{
    FactAclEntryRecord, FactCommentRecord, FactRecord, FactTypeStruct, ObjectTypeStruct,
};
use uuid::Uuid;

use crate::errors::StoreError;

/// A trait that defines the interface to the fact/object store.
///
/// Implementors provide read access to stored records and type metadata,
/// and the two append-only mutations the platform supports: granting an ACL
/// entry and adding a comment. Records returned by the store are immutable
/// snapshots; callers never mutate them in place.
#[async_trait]
pub trait ObjectFactStore: Send + Sync {
    /// Look up fact type metadata by id.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when no fact type with the given id exists.
    async fn get_fact_type(&self, id: Uuid) -> Result<Option<FactTypeStruct>, StoreError>;

    /// Look up object type metadata by id.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when no object type with the given id exists.
    async fn get_object_type(&self, id: Uuid) -> Result<Option<ObjectTypeStruct>, StoreError>;

    /// Fetch a stored fact by id.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when no fact with the given id exists.
    async fn get_fact(&self, id: Uuid) -> Result<Option<FactRecord>, StoreError>;

    /// Enumerate the meta-facts attached to a fact.
    ///
    /// A meta-fact is a fact whose `in_reference_to_id` references the given
    /// fact. The returned order is stable for equal store contents.
    async fn get_meta_facts(&self, fact: &FactRecord) -> Result<Vec<FactRecord>, StoreError>;

    /// Append an ACL entry to a fact and return the durably assigned entry.
    ///
    /// The append is atomic for a single entry. Uniqueness per subject is
    /// not enforced here; callers performing idempotence checks must
    /// tolerate benign duplicates under concurrent grants.
    async fn store_fact_acl_entry(
        &self,
        fact: &FactRecord,
        entry: FactAclEntryRecord,
    ) -> Result<FactAclEntryRecord, StoreError>;

    /// Append a comment to a fact and return the durably assigned comment.
    async fn store_fact_comment(
        &self,
        fact: &FactRecord,
        comment: FactCommentRecord,
    ) -> Result<FactCommentRecord, StoreError>;
}
