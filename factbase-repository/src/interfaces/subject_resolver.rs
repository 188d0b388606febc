//! Subject resolution interface.

use async_trait::async_trait;
use factbase_shared::types::Subject;
use uuid::Uuid;

use crate::errors::StoreError;

/// Resolves subjects eligible for ACL grants, by id or by name.
#[async_trait]
pub trait SubjectResolver: Send + Sync {
    /// Resolve a subject by its id.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when no such subject exists.
    async fn resolve_by_id(&self, id: Uuid) -> Result<Option<Subject>, StoreError>;

    /// Resolve a subject by its unique name.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when no such subject exists.
    async fn resolve_by_name(&self, name: &str) -> Result<Option<Subject>, StoreError>;
}
