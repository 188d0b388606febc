use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One authorized-subject grant on a fact.
///
/// At most one entry per distinct subject is meaningful for authorization;
/// granting access to an already-granted subject must be idempotent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactAclEntryRecord {
    pub id: Uuid,
    pub subject_id: Uuid,
    pub origin_id: Uuid,
    pub timestamp: i64,
}

impl FactAclEntryRecord {
    pub fn new(id: Uuid, subject_id: Uuid, origin_id: Uuid, timestamp: i64) -> Self {
        Self {
            id,
            subject_id,
            origin_id,
            timestamp,
        }
    }
}
