//! Test doubles shared by the unit tests in this crate.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use factbase_repository::errors::{AccessDenied, StoreError};
use factbase_repository::interfaces::{FactFunction, ObjectFactStore, SecurityContext};
use factbase_shared::types::{
    FactAclEntryRecord, FactCommentRecord, FactRecord, FactTypeStruct, ObjectRecord,
    ObjectTypeStruct, PropertyEntry,
};

use crate::context::{GraphContext, TraverseParams};
use crate::edge::FactEdge;
use crate::errors::GraphError;
use crate::properties::ResolveProperties;
use crate::vertex::ObjectVertex;

/// Store stub with seedable type metadata and meta-facts.
#[derive(Default)]
pub(crate) struct StubStore {
    fact_types: Mutex<HashMap<Uuid, FactTypeStruct>>,
    object_types: Mutex<HashMap<Uuid, ObjectTypeStruct>>,
    meta_facts: Mutex<HashMap<Uuid, Vec<FactRecord>>>,
    fact_type_lookups: AtomicUsize,
}

impl StubStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_fact_type(&self, fact_type: FactTypeStruct) {
        self.fact_types
            .lock()
            .unwrap()
            .insert(fact_type.id, fact_type);
    }

    pub(crate) fn add_object_type(&self, object_type: ObjectTypeStruct) {
        self.object_types
            .lock()
            .unwrap()
            .insert(object_type.id, object_type);
    }

    pub(crate) fn add_meta_fact(&self, owner_id: Uuid, meta: FactRecord) {
        self.meta_facts
            .lock()
            .unwrap()
            .entry(owner_id)
            .or_default()
            .push(meta);
    }

    pub(crate) fn fact_type_lookups(&self) -> usize {
        self.fact_type_lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ObjectFactStore for StubStore {
    async fn get_fact_type(&self, id: Uuid) -> Result<Option<FactTypeStruct>, StoreError> {
        self.fact_type_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.fact_types.lock().unwrap().get(&id).cloned())
    }

    async fn get_object_type(&self, id: Uuid) -> Result<Option<ObjectTypeStruct>, StoreError> {
        Ok(self.object_types.lock().unwrap().get(&id).cloned())
    }

    async fn get_fact(&self, _id: Uuid) -> Result<Option<FactRecord>, StoreError> {
        Ok(None)
    }

    async fn get_meta_facts(&self, fact: &FactRecord) -> Result<Vec<FactRecord>, StoreError> {
        Ok(self
            .meta_facts
            .lock()
            .unwrap()
            .get(&fact.id)
            .cloned()
            .unwrap_or_default())
    }

    async fn store_fact_acl_entry(
        &self,
        _fact: &FactRecord,
        _entry: FactAclEntryRecord,
    ) -> Result<FactAclEntryRecord, StoreError> {
        Err(StoreError::backend("not supported by stub"))
    }

    async fn store_fact_comment(
        &self,
        _fact: &FactRecord,
        _comment: FactCommentRecord,
    ) -> Result<FactCommentRecord, StoreError> {
        Err(StoreError::backend("not supported by stub"))
    }
}

/// Security context that allows everything.
pub(crate) struct PermitAll {
    user_id: Uuid,
}

impl PermitAll {
    pub(crate) fn new() -> Self {
        Self {
            user_id: Uuid::new_v4(),
        }
    }
}

impl SecurityContext for PermitAll {
    fn check_read_permission(&self, _fact: &FactRecord) -> Result<(), AccessDenied> {
        Ok(())
    }

    fn check_permission(
        &self,
        _function: FactFunction,
        _organization_id: Uuid,
    ) -> Result<(), AccessDenied> {
        Ok(())
    }

    fn current_user_id(&self) -> Uuid {
        self.user_id
    }
}

/// Security context that denies reading a fixed set of facts.
pub(crate) struct DenyFacts {
    denied: HashSet<Uuid>,
    user_id: Uuid,
}

impl DenyFacts {
    pub(crate) fn new(denied: impl IntoIterator<Item = Uuid>) -> Self {
        Self {
            denied: denied.into_iter().collect(),
            user_id: Uuid::new_v4(),
        }
    }
}

impl SecurityContext for DenyFacts {
    fn check_read_permission(&self, fact: &FactRecord) -> Result<(), AccessDenied> {
        if self.denied.contains(&fact.id) {
            Err(AccessDenied::new("fact is not readable"))
        } else {
            Ok(())
        }
    }

    fn check_permission(
        &self,
        _function: FactFunction,
        _organization_id: Uuid,
    ) -> Result<(), AccessDenied> {
        Ok(())
    }

    fn current_user_id(&self) -> Uuid {
        self.user_id
    }
}

/// Property resolver returning a fixed set of entries and counting calls.
pub(crate) struct CountingResolver {
    entries: Vec<PropertyEntry>,
    calls: AtomicUsize,
}

impl CountingResolver {
    pub(crate) fn new(entries: Vec<PropertyEntry>) -> Self {
        Self {
            entries,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResolveProperties for CountingResolver {
    async fn object_properties(
        &self,
        _object: &ObjectRecord,
        _object_type: &ObjectTypeStruct,
    ) -> Result<Vec<PropertyEntry>, GraphError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.entries.clone())
    }

    async fn fact_properties(
        &self,
        _fact: &FactRecord,
        _fact_type: &FactTypeStruct,
    ) -> Result<Vec<PropertyEntry>, GraphError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.entries.clone())
    }
}

pub(crate) fn permit_all_graph(store: Arc<StubStore>) -> Arc<GraphContext> {
    GraphContext::new(store, Arc::new(PermitAll::new()), TraverseParams::default())
}

pub(crate) fn counting_graph(resolver: Arc<CountingResolver>) -> Arc<GraphContext> {
    GraphContext::with_property_resolver(
        Arc::new(StubStore::new()),
        Arc::new(PermitAll::new()),
        resolver,
        TraverseParams::default(),
    )
}

pub(crate) fn test_vertex(graph: &Arc<GraphContext>) -> ObjectVertex {
    ObjectVertex::builder()
        .graph(graph.clone())
        .object_record(ObjectRecord::new(Uuid::new_v4()).with_value("someObjectValue"))
        .object_type(ObjectTypeStruct::new(Uuid::new_v4(), "someObjectType"))
        .build()
        .unwrap()
}

pub(crate) fn test_edge(graph: &Arc<GraphContext>) -> FactEdge {
    let fact_type = FactTypeStruct::new(Uuid::new_v4(), "someFactType");
    let record = FactRecord::new(Uuid::new_v4())
        .with_type_id(fact_type.id)
        .with_value("value")
        .with_organization_id(Uuid::new_v4())
        .with_origin_id(Uuid::new_v4())
        .with_added_by_id(Uuid::new_v4())
        .with_trust(0.3)
        .with_confidence(0.5)
        .with_timestamp(123456789)
        .with_last_seen_timestamp(987654321);

    FactEdge::builder()
        .graph(graph.clone())
        .fact_record(record)
        .fact_type(fact_type)
        .out_vertex(Arc::new(test_vertex(graph)))
        .in_vertex(Arc::new(test_vertex(graph)))
        .build()
        .unwrap()
}
