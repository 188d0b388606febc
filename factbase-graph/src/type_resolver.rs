//! Type metadata resolution.

use factbase_repository::interfaces::ObjectFactStore;
use factbase_shared::types::{FactTypeStruct, ObjectTypeStruct};
use std::sync::Arc;
use uuid::Uuid;

use crate::errors::GraphError;

/// Resolves type ids to their `{id, name}` metadata via the store.
///
/// An absent id is a valid no-op input and resolves to `None`, as does an
/// id the store does not know. The resolver is a plain pass-through and is
/// safe to call repeatedly; callers that need caching memoize the result
/// themselves.
#[derive(Clone)]
pub struct TypeInfoResolver {
    store: Arc<dyn ObjectFactStore>,
}

impl TypeInfoResolver {
    pub fn new(store: Arc<dyn ObjectFactStore>) -> Self {
        Self { store }
    }

    /// Resolve fact type metadata.
    pub async fn fact_type(&self, id: Option<Uuid>) -> Result<Option<FactTypeStruct>, GraphError> {
        let Some(id) = id else {
            return Ok(None);
        };
        Ok(self.store.get_fact_type(id).await?)
    }

    /// Resolve object type metadata.
    pub async fn object_type(
        &self,
        id: Option<Uuid>,
    ) -> Result<Option<ObjectTypeStruct>, GraphError> {
        let Some(id) = id else {
            return Ok(None);
        };
        Ok(self.store.get_object_type(id).await?)
    }
}
