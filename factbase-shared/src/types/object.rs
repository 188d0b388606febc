use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored representation of an object, the vertex-like entity facts refer to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectRecord {
    pub id: Uuid,
    pub type_id: Uuid,
    pub value: String,
}

impl ObjectRecord {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            type_id: Uuid::nil(),
            value: String::new(),
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
}
