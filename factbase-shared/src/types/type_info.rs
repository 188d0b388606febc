use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Resolved fact type metadata. Fetched once per distinct type, not per
/// property access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactTypeStruct {
    pub id: Uuid,
    pub name: String,
}

impl FactTypeStruct {
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Resolved object type metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectTypeStruct {
    pub id: Uuid,
    pub name: String,
}

impl ObjectTypeStruct {
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
