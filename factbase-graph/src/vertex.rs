//! Object-backed graph vertex.

use factbase_shared::types::{ObjectRecord, ObjectTypeStruct, PropertyEntry, PropertyValue};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::context::GraphContext;
use crate::errors::GraphError;

/// A vertex adapting one stored object record.
///
/// Cheap, request-scoped view: the only mutable state is the memoized
/// property superset, computed at most once per instance. Identity follows
/// the backing record's id.
pub struct ObjectVertex {
    graph: Arc<GraphContext>,
    record: ObjectRecord,
    object_type: ObjectTypeStruct,
    properties: OnceCell<Vec<PropertyEntry>>,
}

impl ObjectVertex {
    pub fn builder() -> ObjectVertexBuilder {
        ObjectVertexBuilder::default()
    }

    /// The vertex id, derived from the backing record.
    pub fn id(&self) -> Uuid {
        self.record.id
    }

    /// The resolved object type's name.
    pub fn label(&self) -> &str {
        &self.object_type.name
    }

    pub fn graph(&self) -> &Arc<GraphContext> {
        &self.graph
    }

    pub fn record(&self) -> &ObjectRecord {
        &self.record
    }

    /// The memoized property superset. The property resolver is consulted
    /// on first access only; repeated calls observe the cached result. A
    /// failed resolution is not cached.
    async fn resolved_properties(&self) -> Result<&Vec<PropertyEntry>, GraphError> {
        self.properties
            .get_or_try_init(|| async {
                self.graph
                    .property_resolver()
                    .object_properties(&self.record, &self.object_type)
                    .await
            })
            .await
    }

    /// Properties matching the given keys, in resolution order. An empty
    /// key list matches everything.
    pub async fn properties(&self, keys: &[&str]) -> Result<Vec<&PropertyEntry>, GraphError> {
        let all = self.resolved_properties().await?;
        Ok(all
            .iter()
            .filter(|entry| keys.is_empty() || keys.contains(&entry.key.as_str()))
            .collect())
    }

    /// The typed value of a single property.
    ///
    /// Fails with [`GraphError::PropertyNotPresent`] when no property with
    /// the key exists; the failure leaves the vertex and its cache intact.
    pub async fn value(&self, key: &str) -> Result<&PropertyValue, GraphError> {
        let all = self.resolved_properties().await?;
        all.iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.value)
            .ok_or_else(|| GraphError::PropertyNotPresent(key.to_string()))
    }
}

impl PartialEq for ObjectVertex {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for ObjectVertex {}

impl Hash for ObjectVertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.record.id.hash(state);
    }
}

impl fmt::Display for ObjectVertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v[{}]", self.record.id)
    }
}

impl fmt::Debug for ObjectVertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectVertex")
            .field("id", &self.record.id)
            .field("label", &self.object_type.name)
            .finish()
    }
}

/// Builder validating all required vertex fields atomically.
#[derive(Default)]
pub struct ObjectVertexBuilder {
    graph: Option<Arc<GraphContext>>,
    record: Option<ObjectRecord>,
    object_type: Option<ObjectTypeStruct>,
}

impl ObjectVertexBuilder {
    pub fn graph(mut self, graph: Arc<GraphContext>) -> Self {
        self.graph = Some(graph);
        self
    }

    pub fn object_record(mut self, record: ObjectRecord) -> Self {
        self.record = Some(record);
        self
    }

    pub fn object_type(mut self, object_type: ObjectTypeStruct) -> Self {
        self.object_type = Some(object_type);
        self
    }

    pub fn build(self) -> Result<ObjectVertex, GraphError> {
        Ok(ObjectVertex {
            graph: self.graph.ok_or(GraphError::IncompleteAdapter("graph"))?,
            record: self
                .record
                .ok_or(GraphError::IncompleteAdapter("object record"))?,
            object_type: self
                .object_type
                .ok_or(GraphError::IncompleteAdapter("object type"))?,
            properties: OnceCell::new(),
        })
    }
}
