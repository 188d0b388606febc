//! In-memory store implementation.
//!
//! Backs integration tests and embedding services that do not need durable
//! persistence. State lives in lock-guarded maps; the append mutations
//! mirror a single-record append on a real backend.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use factbase_shared::types::{
    FactAclEntryRecord, FactCommentRecord, FactRecord, FactTypeStruct, ObjectTypeStruct, Subject,
};

use crate::errors::StoreError;
use crate::interfaces::{ObjectFactStore, SubjectResolver};

/// In-memory implementation of [`ObjectFactStore`] and [`SubjectResolver`].
#[derive(Default)]
pub struct MemoryStore {
    facts: RwLock<HashMap<Uuid, FactRecord>>,
    fact_types: RwLock<HashMap<Uuid, FactTypeStruct>>,
    object_types: RwLock<HashMap<Uuid, ObjectTypeStruct>>,
    subjects: RwLock<Vec<Subject>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a fact. An existing fact with the same id is replaced.
    pub async fn put_fact(&self, fact: FactRecord) {
        self.facts.write().await.insert(fact.id, fact);
    }

    /// Seed fact type metadata.
    pub async fn put_fact_type(&self, fact_type: FactTypeStruct) {
        self.fact_types.write().await.insert(fact_type.id, fact_type);
    }

    /// Seed object type metadata.
    pub async fn put_object_type(&self, object_type: ObjectTypeStruct) {
        self.object_types
            .write()
            .await
            .insert(object_type.id, object_type);
    }

    /// Seed a resolvable subject.
    pub async fn put_subject(&self, subject: Subject) {
        self.subjects.write().await.push(subject);
    }
}

#[async_trait]
impl ObjectFactStore for MemoryStore {
    async fn get_fact_type(&self, id: Uuid) -> Result<Option<FactTypeStruct>, StoreError> {
        Ok(self.fact_types.read().await.get(&id).cloned())
    }

    async fn get_object_type(&self, id: Uuid) -> Result<Option<ObjectTypeStruct>, StoreError> {
        Ok(self.object_types.read().await.get(&id).cloned())
    }

    async fn get_fact(&self, id: Uuid) -> Result<Option<FactRecord>, StoreError> {
        Ok(self.facts.read().await.get(&id).cloned())
    }

    async fn get_meta_facts(&self, fact: &FactRecord) -> Result<Vec<FactRecord>, StoreError> {
        let facts = self.facts.read().await;
        let mut meta: Vec<FactRecord> = facts
            .values()
            .filter(|candidate| candidate.in_reference_to_id == Some(fact.id))
            .cloned()
            .collect();
        // HashMap iteration order is arbitrary; keep the result stable.
        meta.sort_by_key(|record| (record.timestamp, record.id));
        Ok(meta)
    }

    async fn store_fact_acl_entry(
        &self,
        fact: &FactRecord,
        entry: FactAclEntryRecord,
    ) -> Result<FactAclEntryRecord, StoreError> {
        let mut facts = self.facts.write().await;
        let stored = facts
            .get_mut(&fact.id)
            .ok_or_else(|| StoreError::not_found(format!("fact {}", fact.id)))?;
        stored.acl.push(entry.clone());
        tracing::debug!(fact = %fact.id, subject = %entry.subject_id, "Stored ACL entry");
        Ok(entry)
    }

    async fn store_fact_comment(
        &self,
        fact: &FactRecord,
        comment: FactCommentRecord,
    ) -> Result<FactCommentRecord, StoreError> {
        let mut facts = self.facts.write().await;
        let stored = facts
            .get_mut(&fact.id)
            .ok_or_else(|| StoreError::not_found(format!("fact {}", fact.id)))?;
        stored.comments.push(comment.clone());
        tracing::debug!(fact = %fact.id, comment = %comment.id, "Stored comment");
        Ok(comment)
    }
}

#[async_trait]
impl SubjectResolver for MemoryStore {
    async fn resolve_by_id(&self, id: Uuid) -> Result<Option<Subject>, StoreError> {
        Ok(self
            .subjects
            .read()
            .await
            .iter()
            .find(|subject| subject.id == id)
            .cloned())
    }

    async fn resolve_by_name(&self, name: &str) -> Result<Option<Subject>, StoreError> {
        Ok(self
            .subjects
            .read()
            .await
            .iter()
            .find(|subject| subject.name == name)
            .cloned())
    }
}
