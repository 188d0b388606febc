//! List the ACL of a fact.

use factbase_repository::interfaces::{FactFunction, SecurityContext};
use std::sync::Arc;
use tracing::instrument;

use crate::converters::AclEntryResponseConverter;
use crate::errors::ServiceError;
use crate::requests::GetFactAclRequest;
use crate::responses::AclEntryResponse;
use crate::resolvers::ResolveFactRequest;

pub struct FactGetAclDelegate {
    security: Arc<dyn SecurityContext>,
    fact_resolver: Arc<dyn ResolveFactRequest>,
    converter: Arc<dyn AclEntryResponseConverter>,
}

impl FactGetAclDelegate {
    pub fn new(
        security: Arc<dyn SecurityContext>,
        fact_resolver: Arc<dyn ResolveFactRequest>,
        converter: Arc<dyn AclEntryResponseConverter>,
    ) -> Self {
        Self {
            security,
            fact_resolver,
            converter,
        }
    }

    #[instrument(skip_all, fields(fact = %request.fact))]
    pub async fn handle(
        &self,
        request: GetFactAclRequest,
    ) -> Result<Vec<AclEntryResponse>, ServiceError> {
        let fact = self.fact_resolver.resolve_fact(request.fact).await?;
        self.security.check_read_permission(&fact)?;
        self.security
            .check_permission(FactFunction::ViewFactAccess, fact.organization_id)?;

        Ok(fact
            .acl
            .iter()
            .map(|entry| self.converter.convert(entry))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockFactResolver, MockSecurity, RecordingAclConverter};
    use factbase_shared::types::{FactAclEntryRecord, FactRecord};
    use uuid::Uuid;

    fn delegate(security: MockSecurity, fact: FactRecord) -> FactGetAclDelegate {
        FactGetAclDelegate::new(
            Arc::new(security),
            Arc::new(MockFactResolver::returning(fact)),
            Arc::new(RecordingAclConverter::new()),
        )
    }

    #[tokio::test]
    async fn test_get_acl_no_access_to_fact() {
        let fact = FactRecord::new(Uuid::new_v4());
        let delegate = delegate(MockSecurity::deny_read(Uuid::new_v4()), fact.clone());

        let result = delegate.handle(GetFactAclRequest { fact: fact.id }).await;
        assert!(matches!(result, Err(ServiceError::AccessDenied(_))));
    }

    #[tokio::test]
    async fn test_get_acl_no_view_permission() {
        let fact = FactRecord::new(Uuid::new_v4());
        let delegate = delegate(
            MockSecurity::deny_function(Uuid::new_v4(), FactFunction::ViewFactAccess),
            fact.clone(),
        );

        let result = delegate.handle(GetFactAclRequest { fact: fact.id }).await;
        assert!(matches!(result, Err(ServiceError::AccessDenied(_))));
    }

    #[tokio::test]
    async fn test_get_acl_returns_entries_in_order() {
        let first = FactAclEntryRecord::new(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4(), 1);
        let second = FactAclEntryRecord::new(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4(), 2);
        let fact = FactRecord::new(Uuid::new_v4())
            .add_acl_entry(first.clone())
            .add_acl_entry(second.clone());
        let delegate = delegate(MockSecurity::allow_all(Uuid::new_v4()), fact.clone());

        let responses = delegate
            .handle(GetFactAclRequest { fact: fact.id })
            .await
            .unwrap();
        let ids: Vec<Uuid> = responses.iter().map(|entry| entry.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[tokio::test]
    async fn test_get_acl_of_fact_without_entries() {
        let fact = FactRecord::new(Uuid::new_v4());
        let delegate = delegate(MockSecurity::allow_all(Uuid::new_v4()), fact.clone());

        let responses = delegate
            .handle(GetFactAclRequest { fact: fact.id })
            .await
            .unwrap();
        assert!(responses.is_empty());
    }
}
