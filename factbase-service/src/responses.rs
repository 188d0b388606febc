//! Response DTOs returned by the delegates.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An ACL entry as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AclEntryResponse {
    pub id: Uuid,
    pub subject_id: Uuid,
    pub origin_id: Uuid,
    pub timestamp: i64,
}

/// A fact comment as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactCommentResponse {
    pub id: Uuid,
    pub reply_to_id: Option<Uuid>,
    pub origin_id: Uuid,
    pub comment: String,
    pub timestamp: i64,
}
