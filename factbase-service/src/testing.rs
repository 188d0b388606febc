//! Test doubles shared by the unit tests in this crate.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;
use uuid::Uuid;

use factbase_repository::errors::{AccessDenied, StoreError};
use factbase_repository::interfaces::{
    FactFunction, ObjectFactStore, SecurityContext, SubjectResolver,
};
use factbase_shared::types::{
    FactAclEntryRecord, FactCommentRecord, FactRecord, FactTypeStruct, ObjectTypeStruct, Subject,
};

use crate::converters::{
    AclEntryConverter, AclEntryResponseConverter, FactCommentConverter,
    FactCommentResponseConverter,
};
use crate::errors::{templates, ServiceError, ValidationErrors};
use crate::resolvers::ResolveFactRequest;
use crate::responses::{AclEntryResponse, FactCommentResponse};

/// Fact resolver returning a fixed record, or failing as not-exist.
pub(crate) struct MockFactResolver {
    fact: Option<FactRecord>,
}

impl MockFactResolver {
    pub(crate) fn returning(fact: FactRecord) -> Self {
        Self { fact: Some(fact) }
    }

    pub(crate) fn missing() -> Self {
        Self { fact: None }
    }
}

#[async_trait]
impl ResolveFactRequest for MockFactResolver {
    async fn resolve_fact(&self, _id: Uuid) -> Result<FactRecord, ServiceError> {
        self.fact.clone().ok_or_else(|| {
            ServiceError::invalid_argument(ValidationErrors::single(
                templates::FACT_NOT_EXIST,
                "fact",
            ))
        })
    }
}

/// Subject resolver around a single known subject, recording lookups.
#[derive(Default)]
pub(crate) struct MockSubjectResolver {
    subject: Option<Subject>,
    by_id_calls: Mutex<Vec<Uuid>>,
    by_name_calls: Mutex<Vec<String>>,
}

impl MockSubjectResolver {
    pub(crate) fn returning(subject: Subject) -> Self {
        Self {
            subject: Some(subject),
            ..Self::default()
        }
    }

    pub(crate) fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn by_id_calls(&self) -> Vec<Uuid> {
        self.by_id_calls.lock().unwrap().clone()
    }

    pub(crate) fn by_name_calls(&self) -> Vec<String> {
        self.by_name_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubjectResolver for MockSubjectResolver {
    async fn resolve_by_id(&self, id: Uuid) -> Result<Option<Subject>, StoreError> {
        self.by_id_calls.lock().unwrap().push(id);
        Ok(self.subject.clone().filter(|subject| subject.id == id))
    }

    async fn resolve_by_name(&self, name: &str) -> Result<Option<Subject>, StoreError> {
        self.by_name_calls.lock().unwrap().push(name.to_string());
        Ok(self.subject.clone().filter(|subject| subject.name == name))
    }
}

/// Store recording append calls and echoing the handed-over record.
#[derive(Default)]
pub(crate) struct MockStore {
    acl_writes: Mutex<Vec<(Uuid, FactAclEntryRecord)>>,
    comment_writes: Mutex<Vec<(Uuid, FactCommentRecord)>>,
}

impl MockStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn acl_writes(&self) -> Vec<(Uuid, FactAclEntryRecord)> {
        self.acl_writes.lock().unwrap().clone()
    }

    pub(crate) fn comment_writes(&self) -> Vec<(Uuid, FactCommentRecord)> {
        self.comment_writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectFactStore for MockStore {
    async fn get_fact_type(&self, _id: Uuid) -> Result<Option<FactTypeStruct>, StoreError> {
        Ok(None)
    }

    async fn get_object_type(&self, _id: Uuid) -> Result<Option<ObjectTypeStruct>, StoreError> {
        Ok(None)
    }

    async fn get_fact(&self, _id: Uuid) -> Result<Option<FactRecord>, StoreError> {
        Ok(None)
    }

    async fn get_meta_facts(&self, _fact: &FactRecord) -> Result<Vec<FactRecord>, StoreError> {
        Ok(Vec::new())
    }

    async fn store_fact_acl_entry(
        &self,
        fact: &FactRecord,
        entry: FactAclEntryRecord,
    ) -> Result<FactAclEntryRecord, StoreError> {
        self.acl_writes
            .lock()
            .unwrap()
            .push((fact.id, entry.clone()));
        Ok(entry)
    }

    async fn store_fact_comment(
        &self,
        fact: &FactRecord,
        comment: FactCommentRecord,
    ) -> Result<FactCommentRecord, StoreError> {
        self.comment_writes
            .lock()
            .unwrap()
            .push((fact.id, comment.clone()));
        Ok(comment)
    }
}

/// Security context with selective denial.
pub(crate) struct MockSecurity {
    user_id: Uuid,
    deny_read: bool,
    denied_functions: HashSet<FactFunction>,
}

impl MockSecurity {
    pub(crate) fn allow_all(user_id: Uuid) -> Self {
        Self {
            user_id,
            deny_read: false,
            denied_functions: HashSet::new(),
        }
    }

    pub(crate) fn deny_read(user_id: Uuid) -> Self {
        Self {
            deny_read: true,
            ..Self::allow_all(user_id)
        }
    }

    pub(crate) fn deny_function(user_id: Uuid, function: FactFunction) -> Self {
        Self {
            denied_functions: HashSet::from([function]),
            ..Self::allow_all(user_id)
        }
    }
}

impl SecurityContext for MockSecurity {
    fn check_read_permission(&self, fact: &FactRecord) -> Result<(), AccessDenied> {
        if self.deny_read {
            Err(AccessDenied::new(format!("No read access to fact {}", fact.id)))
        } else {
            Ok(())
        }
    }

    fn check_permission(
        &self,
        function: FactFunction,
        _organization_id: Uuid,
    ) -> Result<(), AccessDenied> {
        if self.denied_functions.contains(&function) {
            Err(AccessDenied::new(format!(
                "Missing function permission '{}'",
                function
            )))
        } else {
            Ok(())
        }
    }

    fn current_user_id(&self) -> Uuid {
        self.user_id
    }
}

/// ACL converter recording every record it converts.
#[derive(Default)]
pub(crate) struct RecordingAclConverter {
    seen: Mutex<Vec<FactAclEntryRecord>>,
}

impl RecordingAclConverter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn seen(&self) -> Vec<FactAclEntryRecord> {
        self.seen.lock().unwrap().clone()
    }
}

impl AclEntryResponseConverter for RecordingAclConverter {
    fn convert(&self, entry: &FactAclEntryRecord) -> AclEntryResponse {
        self.seen.lock().unwrap().push(entry.clone());
        AclEntryConverter.convert(entry)
    }
}

/// Comment converter recording every record it converts.
#[derive(Default)]
pub(crate) struct RecordingCommentConverter {
    seen: Mutex<Vec<FactCommentRecord>>,
}

impl RecordingCommentConverter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn seen(&self) -> Vec<FactCommentRecord> {
        self.seen.lock().unwrap().clone()
    }
}

impl FactCommentResponseConverter for RecordingCommentConverter {
    fn convert(&self, comment: &FactCommentRecord) -> FactCommentResponse {
        self.seen.lock().unwrap().push(comment.clone());
        FactCommentConverter.convert(comment)
    }
}
