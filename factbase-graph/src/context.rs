//! Request-scoped graph context.

use factbase_repository::interfaces::{ObjectFactStore, SecurityContext};
use factbase_shared::types::{FactRecord, ObjectRecord};
use std::sync::Arc;

use crate::edge::FactEdge;
use crate::errors::GraphError;
use crate::properties::{PropertyHelper, ResolveProperties};
use crate::type_resolver::TypeInfoResolver;
use crate::vertex::ObjectVertex;

/// Traversal parameters fixed for the lifetime of one graph context.
#[derive(Debug, Clone, Copy)]
pub struct TraverseParams {
    /// Fold meta-fact properties into fact edges. On by default.
    pub include_meta_facts: bool,
}

impl Default for TraverseParams {
    fn default() -> Self {
        Self {
            include_meta_facts: true,
        }
    }
}

/// The sole owner of everything a traversal needs: the store handle, the
/// caller's security context, the property resolver, and the traversal
/// parameters.
///
/// One context is constructed per inbound request; vertices and edges hold
/// a shared reference to it and are never handed across requests.
pub struct GraphContext {
    store: Arc<dyn ObjectFactStore>,
    security: Arc<dyn SecurityContext>,
    properties: Arc<dyn ResolveProperties>,
    types: TypeInfoResolver,
    params: TraverseParams,
}

impl GraphContext {
    /// Create a context backed by the default [`PropertyHelper`].
    pub fn new(
        store: Arc<dyn ObjectFactStore>,
        security: Arc<dyn SecurityContext>,
        params: TraverseParams,
    ) -> Arc<Self> {
        let properties = Arc::new(PropertyHelper::new(store.clone(), security.clone(), params));
        Self::with_property_resolver(store, security, properties, params)
    }

    /// Create a context with an explicit property resolver.
    pub fn with_property_resolver(
        store: Arc<dyn ObjectFactStore>,
        security: Arc<dyn SecurityContext>,
        properties: Arc<dyn ResolveProperties>,
        params: TraverseParams,
    ) -> Arc<Self> {
        Arc::new(Self {
            types: TypeInfoResolver::new(store.clone()),
            store,
            security,
            properties,
            params,
        })
    }

    pub fn store(&self) -> &Arc<dyn ObjectFactStore> {
        &self.store
    }

    pub fn security(&self) -> &Arc<dyn SecurityContext> {
        &self.security
    }

    pub fn property_resolver(&self) -> &Arc<dyn ResolveProperties> {
        &self.properties
    }

    pub fn params(&self) -> TraverseParams {
        self.params
    }

    /// Adapt an object record as a vertex, resolving its type.
    ///
    /// Fails with [`GraphError::UnresolvedType`] when the record's type is
    /// unknown to the store; an untyped vertex is never handed out.
    pub async fn object_vertex(
        self: &Arc<Self>,
        record: ObjectRecord,
    ) -> Result<ObjectVertex, GraphError> {
        let object_type = self
            .types
            .object_type(Some(record.type_id))
            .await?
            .ok_or(GraphError::UnresolvedType(record.type_id))?;

        ObjectVertex::builder()
            .graph(self.clone())
            .object_record(record)
            .object_type(object_type)
            .build()
    }

    /// Adapt a fact record as an edge between two already-adapted vertices.
    ///
    /// The out/in binding is taken from the arguments, never inferred from
    /// the record's own reference fields.
    pub async fn fact_edge(
        self: &Arc<Self>,
        record: FactRecord,
        out_vertex: Arc<ObjectVertex>,
        in_vertex: Arc<ObjectVertex>,
    ) -> Result<FactEdge, GraphError> {
        let fact_type = self
            .types
            .fact_type(Some(record.type_id))
            .await?
            .ok_or(GraphError::UnresolvedType(record.type_id))?;

        FactEdge::builder()
            .graph(self.clone())
            .fact_record(record)
            .fact_type(fact_type)
            .out_vertex(out_vertex)
            .in_vertex(in_vertex)
            .build()
    }
}
