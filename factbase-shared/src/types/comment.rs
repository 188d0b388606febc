use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A comment attached to a fact, optionally replying to an earlier comment
/// on the same fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactCommentRecord {
    pub id: Uuid,
    pub reply_to_id: Option<Uuid>,
    pub origin_id: Uuid,
    pub comment: String,
    pub timestamp: i64,
}

impl FactCommentRecord {
    pub fn new(id: Uuid, origin_id: Uuid, comment: impl Into<String>, timestamp: i64) -> Self {
        Self {
            id,
            reply_to_id: None,
            origin_id,
            comment: comment.into(),
            timestamp,
        }
    }

    pub fn with_reply_to_id(mut self, reply_to_id: Uuid) -> Self {
        self.reply_to_id = Some(reply_to_id);
        self
    }
}
