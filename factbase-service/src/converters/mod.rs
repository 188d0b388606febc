//! Record-to-response converters.
//!
//! Delegates invoke a converter exactly once per successful request, with
//! the final post-persistence record. The converters are injected behind
//! traits so tests can observe that contract.

use factbase_shared::types::{FactAclEntryRecord, FactCommentRecord};

use crate::responses::{AclEntryResponse, FactCommentResponse};

pub trait AclEntryResponseConverter: Send + Sync {
    fn convert(&self, entry: &FactAclEntryRecord) -> AclEntryResponse;
}

pub trait FactCommentResponseConverter: Send + Sync {
    fn convert(&self, comment: &FactCommentRecord) -> FactCommentResponse;
}

/// Default field-copying ACL entry converter.
#[derive(Default)]
pub struct AclEntryConverter;

impl AclEntryResponseConverter for AclEntryConverter {
    fn convert(&self, entry: &FactAclEntryRecord) -> AclEntryResponse {
        AclEntryResponse {
            id: entry.id,
            subject_id: entry.subject_id,
            origin_id: entry.origin_id,
            timestamp: entry.timestamp,
        }
    }
}

/// Default field-copying comment converter.
#[derive(Default)]
pub struct FactCommentConverter;

impl FactCommentResponseConverter for FactCommentConverter {
    fn convert(&self, comment: &FactCommentRecord) -> FactCommentResponse {
        FactCommentResponse {
            id: comment.id,
            reply_to_id: comment.reply_to_id,
            origin_id: comment.origin_id,
            comment: comment.comment.clone(),
            timestamp: comment.timestamp,
        }
    }
}
