use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A subject that can be granted access to a fact, resolved by id or name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: Uuid,
    pub name: String,
}

impl Subject {
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
