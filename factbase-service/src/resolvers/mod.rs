//! Request-level resolvers.

use async_trait::async_trait;
use factbase_repository::interfaces::ObjectFactStore;
use factbase_shared::types::FactRecord;
use std::sync::Arc;
use uuid::Uuid;

use crate::errors::{templates, ServiceError, ValidationErrors};

/// Resolves the fact a request refers to.
///
/// A missing fact surfaces as an invalid-argument condition tagged
/// `fact.not.exist`, so callers see one coherent validation vocabulary
/// rather than a separate not-found kind.
#[async_trait]
pub trait ResolveFactRequest: Send + Sync {
    async fn resolve_fact(&self, id: Uuid) -> Result<FactRecord, ServiceError>;
}

/// Default resolver against the store.
pub struct FactRequestResolver {
    store: Arc<dyn ObjectFactStore>,
}

impl FactRequestResolver {
    pub fn new(store: Arc<dyn ObjectFactStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ResolveFactRequest for FactRequestResolver {
    async fn resolve_fact(&self, id: Uuid) -> Result<FactRecord, ServiceError> {
        self.store.get_fact(id).await?.ok_or_else(|| {
            ServiceError::invalid_argument(ValidationErrors::single(
                templates::FACT_NOT_EXIST,
                "fact",
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use factbase_repository::memory::MemoryStore;

    #[tokio::test]
    async fn test_resolve_existing_fact() {
        let store = Arc::new(MemoryStore::new());
        let fact = FactRecord::new(Uuid::new_v4()).with_value("observed");
        store.put_fact(fact.clone()).await;

        let resolver = FactRequestResolver::new(store);
        assert_eq!(resolver.resolve_fact(fact.id).await.unwrap(), fact);
    }

    #[tokio::test]
    async fn test_resolve_missing_fact() {
        let resolver = FactRequestResolver::new(Arc::new(MemoryStore::new()));

        let error = resolver.resolve_fact(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(
            error.validation_errors().map(ValidationErrors::templates),
            Some(vec![templates::FACT_NOT_EXIST])
        );
    }
}
