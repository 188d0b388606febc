//! Request DTOs accepted by the delegates.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Grant a subject read access to a fact.
///
/// The subject reference is resolved by id when it parses as a UUID, by
/// name otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantFactAccessRequest {
    pub fact: Uuid,
    pub subject: String,
}

/// Add a comment to a fact, optionally replying to an existing comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateFactCommentRequest {
    pub fact: Uuid,
    pub reply_to: Option<Uuid>,
    pub comment: String,
}

/// List the ACL of a fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetFactAclRequest {
    pub fact: Uuid,
}

/// List the comments of a fact, optionally bounded by an exclusive
/// timestamp window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetFactCommentsRequest {
    pub fact: Uuid,
    pub before: Option<i64>,
    pub after: Option<i64>,
}
