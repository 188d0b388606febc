//! Fact-backed graph edge.

use factbase_shared::types::{FactRecord, FactTypeStruct, PropertyEntry, PropertyValue};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::context::GraphContext;
use crate::errors::GraphError;
use crate::vertex::ObjectVertex;

/// Direction of endpoint iteration on an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    In,
    Out,
    Both,
}

/// An edge adapting one stored fact record.
///
/// The two endpoints are bound explicitly at construction; the edge never
/// derives its direction from the record's own reference fields. Property
/// access follows the same memoized single-fetch contract as the vertex,
/// and includes entries folded in from the fact's meta-facts.
pub struct FactEdge {
    graph: Arc<GraphContext>,
    record: FactRecord,
    fact_type: FactTypeStruct,
    in_vertex: Arc<ObjectVertex>,
    out_vertex: Arc<ObjectVertex>,
    properties: OnceCell<Vec<PropertyEntry>>,
}

impl FactEdge {
    pub fn builder() -> FactEdgeBuilder {
        FactEdgeBuilder::default()
    }

    /// The edge id, derived from the backing record.
    pub fn id(&self) -> Uuid {
        self.record.id
    }

    /// The resolved fact type's name.
    pub fn label(&self) -> &str {
        &self.fact_type.name
    }

    pub fn graph(&self) -> &Arc<GraphContext> {
        &self.graph
    }

    pub fn record(&self) -> &FactRecord {
        &self.record
    }

    pub fn out_vertex(&self) -> &ObjectVertex {
        &self.out_vertex
    }

    pub fn in_vertex(&self) -> &ObjectVertex {
        &self.in_vertex
    }

    /// The endpoints in the given direction: the out-vertex, the in-vertex,
    /// or both in out-then-in order. The iterator is finite and exhausted
    /// after one pass.
    pub fn vertices(&self, direction: Direction) -> impl Iterator<Item = &ObjectVertex> {
        let endpoints: Vec<&ObjectVertex> = match direction {
            Direction::Out => vec![self.out_vertex.as_ref()],
            Direction::In => vec![self.in_vertex.as_ref()],
            Direction::Both => vec![self.out_vertex.as_ref(), self.in_vertex.as_ref()],
        };
        endpoints.into_iter()
    }

    async fn resolved_properties(&self) -> Result<&Vec<PropertyEntry>, GraphError> {
        self.properties
            .get_or_try_init(|| async {
                self.graph
                    .property_resolver()
                    .fact_properties(&self.record, &self.fact_type)
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

    /// The typed value of a single property, unmodified.
    pub async fn value(&self, key: &str) -> Result<&PropertyValue, GraphError> {
        let all = self.resolved_properties().await?;
        all.iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.value)
            .ok_or_else(|| GraphError::PropertyNotPresent(key.to_string()))
    }
}

impl PartialEq for FactEdge {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for FactEdge {}

impl Hash for FactEdge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.record.id.hash(state);
    }
}

impl fmt::Display for FactEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "e[{}][{}-{}->{}]",
            self.record.id,
            self.out_vertex.id(),
            self.fact_type.name,
            self.in_vertex.id()
        )
    }
}

impl fmt::Debug for FactEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactEdge")
            .field("id", &self.record.id)
            .field("label", &self.fact_type.name)
            .field("out", &self.out_vertex.id())
            .field("in", &self.in_vertex.id())
            .finish()
    }
}

/// Builder validating all required edge fields atomically.
#[derive(Default)]
pub struct FactEdgeBuilder {
    graph: Option<Arc<GraphContext>>,
    record: Option<FactRecord>,
    fact_type: Option<FactTypeStruct>,
    in_vertex: Option<Arc<ObjectVertex>>,
    out_vertex: Option<Arc<ObjectVertex>>,
}

impl FactEdgeBuilder {
    pub fn graph(mut self, graph: Arc<GraphContext>) -> Self {
        self.graph = Some(graph);
        self
    }

    pub fn fact_record(mut self, record: FactRecord) -> Self {
        self.record = Some(record);
        self
    }

    pub fn fact_type(mut self, fact_type: FactTypeStruct) -> Self {
        self.fact_type = Some(fact_type);
        self
    }

    pub fn in_vertex(mut self, in_vertex: Arc<ObjectVertex>) -> Self {
        self.in_vertex = Some(in_vertex);
        self
    }

    pub fn out_vertex(mut self, out_vertex: Arc<ObjectVertex>) -> Self {
        self.out_vertex = Some(out_vertex);
        self
    }

    pub fn build(self) -> Result<FactEdge, GraphError> {
        Ok(FactEdge {
            graph: self.graph.ok_or(GraphError::IncompleteAdapter("graph"))?,
            record: self
                .record
                .ok_or(GraphError::IncompleteAdapter("fact record"))?,
            fact_type: self
                .fact_type
                .ok_or(GraphError::IncompleteAdapter("fact type"))?,
            in_vertex: self
                .in_vertex
                .ok_or(GraphError::IncompleteAdapter("in vertex"))?,
            out_vertex: self
                .out_vertex
                .ok_or(GraphError::IncompleteAdapter("out vertex"))?,
            properties: OnceCell::new(),
        })
    }
}
