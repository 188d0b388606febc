//! Property resolution for vertices and edges.
//!
//! Transforms a backing record into the ordered sequence of key/value
//! properties a traversal may see, including entries synthesized from
//! meta-facts attached to a fact.

use async_trait::async_trait;
use factbase_repository::interfaces::{ObjectFactStore, SecurityContext};
use factbase_shared::types::{
    FactRecord, FactTypeStruct, ObjectRecord, ObjectTypeStruct, PropertyEntry,
};
use std::sync::Arc;
use tracing::warn;

use crate::context::TraverseParams;
use crate::errors::GraphError;
use crate::type_resolver::TypeInfoResolver;

/// Key namespace separating meta-fact properties from primary ones.
pub const META_PROPERTY_PREFIX: &str = "meta/";

/// Resolves the full property set of a record.
///
/// The adapters call this through a trait object so tests can substitute a
/// counting implementation; the single-fetch memoization contract of the
/// vertex and edge adapters is defined against this seam.
#[async_trait]
pub trait ResolveProperties: Send + Sync {
    /// All properties of an object record.
    async fn object_properties(
        &self,
        object: &ObjectRecord,
        object_type: &ObjectTypeStruct,
    ) -> Result<Vec<PropertyEntry>, GraphError>;

    /// All properties of a fact record, including meta-fact entries.
    async fn fact_properties(
        &self,
        fact: &FactRecord,
        fact_type: &FactTypeStruct,
    ) -> Result<Vec<PropertyEntry>, GraphError>;
}

/// Default property resolution against the store.
///
/// Fact properties are emitted in a fixed key order; meta-fact entries
/// follow in store order. Meta-facts the caller cannot read are filtered
/// out here, so per-fact visibility holds at traversal time.
pub struct PropertyHelper {
    store: Arc<dyn ObjectFactStore>,
    security: Arc<dyn SecurityContext>,
    types: TypeInfoResolver,
    params: TraverseParams,
}

impl PropertyHelper {
    pub fn new(
        store: Arc<dyn ObjectFactStore>,
        security: Arc<dyn SecurityContext>,
        params: TraverseParams,
    ) -> Self {
        Self {
            types: TypeInfoResolver::new(store.clone()),
            store,
            security,
            params,
        }
    }

    async fn meta_fact_properties(
        &self,
        fact: &FactRecord,
    ) -> Result<Vec<PropertyEntry>, GraphError> {
        let mut entries = Vec::new();
        for meta in self.store.get_meta_facts(fact).await? {
            if !self.security.has_read_permission(&meta) {
                continue;
            }
            let meta_type = match self.types.fact_type(Some(meta.type_id)).await? {
                Some(meta_type) => meta_type,
                None => {
                    warn!(
                        meta_fact = %meta.id,
                        type_id = %meta.type_id,
                        "Skipping meta-fact with unresolvable type"
                    );
                    continue;
                }
            };
            entries.push(PropertyEntry::new(
                format!("{}{}", META_PROPERTY_PREFIX, meta_type.name),
                meta.value.clone(),
            ));
        }
        Ok(entries)
    }
}

#[async_trait]
impl ResolveProperties for PropertyHelper {
    async fn object_properties(
        &self,
        object: &ObjectRecord,
        _object_type: &ObjectTypeStruct,
    ) -> Result<Vec<PropertyEntry>, GraphError> {
        Ok(vec![PropertyEntry::new("value", object.value.clone())])
    }

    async fn fact_properties(
        &self,
        fact: &FactRecord,
        _fact_type: &FactTypeStruct,
    ) -> Result<Vec<PropertyEntry>, GraphError> {
        let mut entries = vec![
            PropertyEntry::new("accessMode", fact.access_mode.as_ref()),
            PropertyEntry::new("addedByID", fact.added_by_id.to_string()),
            PropertyEntry::new("confidence", fact.confidence),
            PropertyEntry::new("lastSeenTimestamp", fact.last_seen_timestamp),
            PropertyEntry::new("organizationID", fact.organization_id.to_string()),
            PropertyEntry::new("originID", fact.origin_id.to_string()),
            PropertyEntry::new("timestamp", fact.timestamp),
            PropertyEntry::new("trust", fact.trust),
            PropertyEntry::new("value", fact.value.clone()),
        ];
        if self.params.include_meta_facts {
            entries.extend(self.meta_fact_properties(fact).await?);
        }
        Ok(entries)
    }
}
