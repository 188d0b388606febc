//! List the comments of a fact.

use factbase_repository::interfaces::{FactFunction, SecurityContext};
use std::sync::Arc;
use tracing::instrument;

use crate::converters::FactCommentResponseConverter;
use crate::errors::ServiceError;
use crate::requests::GetFactCommentsRequest;
use crate::responses::FactCommentResponse;
use crate::resolvers::ResolveFactRequest;

pub struct FactGetCommentsDelegate {
    security: Arc<dyn SecurityContext>,
    fact_resolver: Arc<dyn ResolveFactRequest>,
    converter: Arc<dyn FactCommentResponseConverter>,
}

impl FactGetCommentsDelegate {
    pub fn new(
        security: Arc<dyn SecurityContext>,
        fact_resolver: Arc<dyn ResolveFactRequest>,
        converter: Arc<dyn FactCommentResponseConverter>,
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
        request: GetFactCommentsRequest,
    ) -> Result<Vec<FactCommentResponse>, ServiceError> {
        let fact = self.fact_resolver.resolve_fact(request.fact).await?;
        self.security.check_read_permission(&fact)?;
        self.security
            .check_permission(FactFunction::ViewFactComment, fact.organization_id)?;

        // Both bounds are exclusive.
        Ok(fact
            .comments
            .iter()
            .filter(|comment| request.before.is_none_or(|bound| comment.timestamp < bound))
            .filter(|comment| request.after.is_none_or(|bound| comment.timestamp > bound))
            .map(|comment| self.converter.convert(comment))
            .collect())
    }
}
