//! Grant a subject read access to a fact.

use chrono::Utc;
use factbase_repository::interfaces::{
    FactFunction, ObjectFactStore, SecurityContext, SubjectResolver,
};
use factbase_shared::types::{AccessMode, FactAclEntryRecord, Subject};
use std::sync::Arc;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::converters::AclEntryResponseConverter;
use crate::errors::{templates, ServiceError, ValidationError};
use crate::requests::GrantFactAccessRequest;
use crate::responses::AclEntryResponse;
use crate::resolvers::ResolveFactRequest;

/// Adds an ACL entry for a subject on a fact.
///
/// Granting to an already-authorized subject is idempotent: the existing
/// entry is returned as-is, with its original origin and timestamp, and no
/// second entry is written.
pub struct FactGrantAccessDelegate {
    security: Arc<dyn SecurityContext>,
    store: Arc<dyn ObjectFactStore>,
    fact_resolver: Arc<dyn ResolveFactRequest>,
    subject_resolver: Arc<dyn SubjectResolver>,
    converter: Arc<dyn AclEntryResponseConverter>,
}

impl FactGrantAccessDelegate {
    pub fn new(
        security: Arc<dyn SecurityContext>,
        store: Arc<dyn ObjectFactStore>,
        fact_resolver: Arc<dyn ResolveFactRequest>,
        subject_resolver: Arc<dyn SubjectResolver>,
        converter: Arc<dyn AclEntryResponseConverter>,
    ) -> Self {
        Self {
            security,
            store,
            fact_resolver,
            subject_resolver,
            converter,
        }
    }

    #[instrument(skip_all, fields(fact = %request.fact))]
    pub async fn handle(
        &self,
        request: GrantFactAccessRequest,
    ) -> Result<AclEntryResponse, ServiceError> {
        let fact = self.fact_resolver.resolve_fact(request.fact).await?;
        self.security.check_read_permission(&fact)?;
        self.security
            .check_permission(FactFunction::GrantFactAccess, fact.organization_id)?;

        // The public-fact rule and subject existence are independent
        // checks; both are evaluated and reported together.
        let mut errors = Vec::new();
        if fact.access_mode == AccessMode::Public {
            errors.push(ValidationError::new(templates::FACT_IS_PUBLIC, "fact"));
        }
        let subject = self.resolve_subject(&request.subject).await?;
        if subject.is_none() {
            errors.push(ValidationError::new(templates::SUBJECT_NOT_EXIST, "subject"));
        }
        let subject = match subject {
            Some(subject) if errors.is_empty() => subject,
            _ => return Err(ServiceError::invalid_argument(errors)),
        };

        if let Some(existing) = fact.acl_entry_for(subject.id) {
            debug!(subject = %subject.id, "Subject already in ACL, returning existing entry");
            return Ok(self.converter.convert(existing));
        }

        let entry = FactAclEntryRecord::new(
            Uuid::new_v4(),
            subject.id,
            self.security.current_user_id(),
            Utc::now().timestamp_millis(),
        );
        let stored = self.store.store_fact_acl_entry(&fact, entry).await?;
        debug!(subject = %stored.subject_id, "Granted fact access");
        Ok(self.converter.convert(&stored))
    }

    /// Resolve the subject reference, by id when it parses as one, by name
    /// otherwise.
    async fn resolve_subject(&self, reference: &str) -> Result<Option<Subject>, ServiceError> {
        let resolved = match Uuid::parse_str(reference) {
            Ok(id) => self.subject_resolver.resolve_by_id(id).await?,
            Err(_) => self.subject_resolver.resolve_by_name(reference).await?,
        };
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationErrors;
    use crate::testing::{
        MockFactResolver, MockSecurity, MockStore, MockSubjectResolver, RecordingAclConverter,
    };
    use factbase_shared::types::FactRecord;

    struct Fixture {
        subject: Subject,
        store: Arc<MockStore>,
        subject_resolver: Arc<MockSubjectResolver>,
        converter: Arc<RecordingAclConverter>,
    }

    impl Fixture {
        fn new(subject: Subject) -> Self {
            Self {
                subject: subject.clone(),
                store: Arc::new(MockStore::new()),
                subject_resolver: Arc::new(MockSubjectResolver::returning(subject)),
                converter: Arc::new(RecordingAclConverter::new()),
            }
        }

        fn delegate(&self, security: MockSecurity, fact: FactRecord) -> FactGrantAccessDelegate {
            FactGrantAccessDelegate::new(
                Arc::new(security),
                self.store.clone(),
                Arc::new(MockFactResolver::returning(fact)),
                self.subject_resolver.clone(),
                self.converter.clone(),
            )
        }

        fn request(&self, fact: &FactRecord) -> GrantFactAccessRequest {
            GrantFactAccessRequest {
                fact: fact.id,
                subject: self.subject.name.clone(),
            }
        }
    }

    fn subject() -> Subject {
        Subject::new(Uuid::new_v4(), "subject")
    }

    fn role_based_fact() -> FactRecord {
        FactRecord::new(Uuid::new_v4())
            .with_organization_id(Uuid::new_v4())
            .with_access_mode(AccessMode::RoleBased)
    }

    #[tokio::test]
    async fn test_grant_access_no_access_to_fact() {
        let fixture = Fixture::new(subject());
        let fact = role_based_fact();
        let delegate = fixture.delegate(MockSecurity::deny_read(Uuid::new_v4()), fact.clone());

        let result = delegate.handle(fixture.request(&fact)).await;
        assert!(matches!(result, Err(ServiceError::AccessDenied(_))));
        assert!(fixture.store.acl_writes().is_empty());
    }

    #[tokio::test]
    async fn test_grant_access_no_grant_permission() {
        let fixture = Fixture::new(subject());
        let fact = role_based_fact();
        let delegate = fixture.delegate(
            MockSecurity::deny_function(Uuid::new_v4(), FactFunction::GrantFactAccess),
            fact.clone(),
        );

        let result = delegate.handle(fixture.request(&fact)).await;
        assert!(matches!(result, Err(ServiceError::AccessDenied(_))));
        assert!(fixture.store.acl_writes().is_empty());
    }

    #[tokio::test]
    async fn test_grant_access_fact_not_found() {
        let fixture = Fixture::new(subject());
        let delegate = FactGrantAccessDelegate::new(
            Arc::new(MockSecurity::allow_all(Uuid::new_v4())),
            fixture.store.clone(),
            Arc::new(MockFactResolver::missing()),
            fixture.subject_resolver.clone(),
            fixture.converter.clone(),
        );

        let error = delegate
            .handle(GrantFactAccessRequest {
                fact: Uuid::new_v4(),
                subject: "subject".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(
            error.validation_errors().map(ValidationErrors::templates),
            Some(vec![templates::FACT_NOT_EXIST])
        );
    }

    #[tokio::test]
    async fn test_grant_access_to_public_fact() {
        let fixture = Fixture::new(subject());
        let fact = role_based_fact().with_access_mode(AccessMode::Public);
        let delegate = fixture.delegate(MockSecurity::allow_all(Uuid::new_v4()), fact.clone());

        let error = delegate.handle(fixture.request(&fact)).await.unwrap_err();
        assert_eq!(
            error.validation_errors().map(ValidationErrors::templates),
            Some(vec![templates::FACT_IS_PUBLIC])
        );
        assert!(fixture.store.acl_writes().is_empty());
    }

    #[tokio::test]
    async fn test_grant_access_subject_not_found() {
        let fact = role_based_fact();
        let store = Arc::new(MockStore::new());
        let subject_resolver = Arc::new(MockSubjectResolver::empty());
        let delegate = FactGrantAccessDelegate::new(
            Arc::new(MockSecurity::allow_all(Uuid::new_v4())),
            store.clone(),
            Arc::new(MockFactResolver::returning(fact.clone())),
            subject_resolver.clone(),
            Arc::new(RecordingAclConverter::new()),
        );

        let error = delegate
            .handle(GrantFactAccessRequest {
                fact: fact.id,
                subject: "subject".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(
            error.validation_errors().map(ValidationErrors::templates),
            Some(vec![templates::SUBJECT_NOT_EXIST])
        );
        assert_eq!(subject_resolver.by_name_calls(), vec!["subject".to_string()]);
        assert!(store.acl_writes().is_empty());
    }

    #[tokio::test]
    async fn test_grant_access_to_public_fact_with_unknown_subject_reports_both() {
        let fact = role_based_fact().with_access_mode(AccessMode::Public);
        let delegate = FactGrantAccessDelegate::new(
            Arc::new(MockSecurity::allow_all(Uuid::new_v4())),
            Arc::new(MockStore::new()),
            Arc::new(MockFactResolver::returning(fact.clone())),
            Arc::new(MockSubjectResolver::empty()),
            Arc::new(RecordingAclConverter::new()),
        );

        let error = delegate
            .handle(GrantFactAccessRequest {
                fact: fact.id,
                subject: "subject".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(
            error.validation_errors().map(ValidationErrors::templates),
            Some(vec![templates::FACT_IS_PUBLIC, templates::SUBJECT_NOT_EXIST])
        );
    }

    #[tokio::test]
    async fn test_grant_access_subject_already_in_acl() {
        let granted = subject();
        let fixture = Fixture::new(granted.clone());
        let existing =
            FactAclEntryRecord::new(Uuid::new_v4(), granted.id, Uuid::new_v4(), 123456789);
        let fact = role_based_fact().add_acl_entry(existing.clone());
        let delegate = fixture.delegate(MockSecurity::allow_all(Uuid::new_v4()), fact.clone());

        let response = delegate.handle(fixture.request(&fact)).await.unwrap();

        assert!(fixture.store.acl_writes().is_empty());
        assert_eq!(fixture.converter.seen(), vec![existing.clone()]);
        // The existing entry comes back unchanged, original timestamp included.
        assert_eq!(response.origin_id, existing.origin_id);
        assert_eq!(response.timestamp, existing.timestamp);
    }

    #[tokio::test]
    async fn test_grant_access_by_subject_id() {
        let current_user = Uuid::new_v4();
        let granted = subject();
        let fixture = Fixture::new(granted.clone());
        let fact = role_based_fact();
        let delegate = fixture.delegate(MockSecurity::allow_all(current_user), fact.clone());

        let response = delegate
            .handle(GrantFactAccessRequest {
                fact: fact.id,
                subject: granted.id.to_string(),
            })
            .await
            .unwrap();

        assert_eq!(fixture.subject_resolver.by_id_calls(), vec![granted.id]);
        let writes = fixture.store.acl_writes();
        assert_eq!(writes.len(), 1);
        let (fact_id, entry) = &writes[0];
        assert_eq!(*fact_id, fact.id);
        assert_eq!(entry.subject_id, granted.id);
        assert_eq!(entry.origin_id, current_user);
        assert!(entry.timestamp > 0);
        assert_eq!(fixture.converter.seen(), vec![entry.clone()]);
        assert_eq!(response.subject_id, granted.id);
    }

    #[tokio::test]
    async fn test_grant_access_by_subject_name() {
        let current_user = Uuid::new_v4();
        let granted = subject();
        let fixture = Fixture::new(granted.clone());
        let fact = role_based_fact();
        let delegate = fixture.delegate(MockSecurity::allow_all(current_user), fact.clone());

        let response = delegate.handle(fixture.request(&fact)).await.unwrap();

        assert_eq!(
            fixture.subject_resolver.by_name_calls(),
            vec![granted.name.clone()]
        );
        let writes = fixture.store.acl_writes();
        assert_eq!(writes.len(), 1);
        let (_, entry) = &writes[0];
        assert_eq!(entry.subject_id, granted.id);
        assert_eq!(entry.origin_id, current_user);
        assert!(entry.timestamp > 0);
        assert_eq!(response.origin_id, current_user);
    }
}
