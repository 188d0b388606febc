use super::{AccessMode, FactAclEntryRecord, FactCommentRecord};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored representation of a fact.
///
/// A fact is an edge-like assertion connecting two objects, or a meta-fact
/// standing alone and referencing another fact via `in_reference_to_id`.
/// Records are handed out read-only by the storage layer; consumers never
/// mutate a stored fact in place. ACL entries and comments are appended
/// through the storage layer, which returns the updated record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactRecord {
    pub id: Uuid,
    pub type_id: Uuid,
    pub value: String,
    pub in_reference_to_id: Option<Uuid>,
    pub organization_id: Uuid,
    pub origin_id: Uuid,
    pub added_by_id: Uuid,
    pub trust: f32,
    pub confidence: f32,
    pub access_mode: AccessMode,
    pub timestamp: i64,
    pub last_seen_timestamp: i64,
    pub acl: Vec<FactAclEntryRecord>,
    pub comments: Vec<FactCommentRecord>,
}

impl FactRecord {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            type_id: Uuid::nil(),
            value: String::new(),
            in_reference_to_id: None,
            organization_id: Uuid::nil(),
            origin_id: Uuid::nil(),
            added_by_id: Uuid::nil(),
            trust: 0.0,
            confidence: 0.0,
            access_mode: AccessMode::default(),
            timestamp: 0,
            last_seen_timestamp: 0,
            acl: Vec::new(),
            comments: Vec::new(),
        }
    }

    pub fn with_type_id(mut self, type_id: Uuid) -> Self {
        self.type_id = type_id;
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_in_reference_to_id(mut self, in_reference_to_id: Uuid) -> Self {
        self.in_reference_to_id = Some(in_reference_to_id);
        self
    }

    pub fn with_organization_id(mut self, organization_id: Uuid) -> Self {
        self.organization_id = organization_id;
        self
    }

    pub fn with_origin_id(mut self, origin_id: Uuid) -> Self {
        self.origin_id = origin_id;
        self
    }

    pub fn with_added_by_id(mut self, added_by_id: Uuid) -> Self {
        self.added_by_id = added_by_id;
        self
    }

    pub fn with_trust(mut self, trust: f32) -> Self {
        self.trust = trust;
        self
    }

    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn with_access_mode(mut self, access_mode: AccessMode) -> Self {
        self.access_mode = access_mode;
        self
    }

    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_last_seen_timestamp(mut self, last_seen_timestamp: i64) -> Self {
        self.last_seen_timestamp = last_seen_timestamp;
        self
    }

    pub fn add_acl_entry(mut self, entry: FactAclEntryRecord) -> Self {
        self.acl.push(entry);
        self
    }

    pub fn add_comment(mut self, comment: FactCommentRecord) -> Self {
        self.comments.push(comment);
        self
    }

    /// Look up the ACL entry granted to a specific subject, if any.
    pub fn acl_entry_for(&self, subject_id: Uuid) -> Option<&FactAclEntryRecord> {
        self.acl.iter().find(|entry| entry.subject_id == subject_id)
    }

    /// Look up a comment on this fact by its id.
    pub fn comment(&self, comment_id: Uuid) -> Option<&FactCommentRecord> {
        self.comments.iter().find(|comment| comment.id == comment_id)
    }
}
