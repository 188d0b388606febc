//! Add a comment to a fact.

use chrono::Utc;
use factbase_repository::interfaces::{FactFunction, ObjectFactStore, SecurityContext};
use factbase_shared::types::FactCommentRecord;
use std::sync::Arc;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::converters::FactCommentResponseConverter;
use crate::errors::{templates, ServiceError, ValidationErrors};
use crate::requests::CreateFactCommentRequest;
use crate::responses::FactCommentResponse;
use crate::resolvers::ResolveFactRequest;

/// Appends a comment to a fact, optionally as a reply to an existing
/// comment on the same fact.
pub struct FactCreateCommentDelegate {
    security: Arc<dyn SecurityContext>,
    store: Arc<dyn ObjectFactStore>,
    fact_resolver: Arc<dyn ResolveFactRequest>,
    converter: Arc<dyn FactCommentResponseConverter>,
}

impl FactCreateCommentDelegate {
    pub fn new(
        security: Arc<dyn SecurityContext>,
        store: Arc<dyn ObjectFactStore>,
        fact_resolver: Arc<dyn ResolveFactRequest>,
        converter: Arc<dyn FactCommentResponseConverter>,
    ) -> Self {
        Self {
            security,
            store,
            fact_resolver,
            converter,
        }
    }

    #[instrument(skip_all, fields(fact = %request.fact))]
    pub async fn handle(
        &self,
        request: CreateFactCommentRequest,
    ) -> Result<FactCommentResponse, ServiceError> {
        let fact = self.fact_resolver.resolve_fact(request.fact).await?;
        self.security.check_read_permission(&fact)?;
        self.security
            .check_permission(FactFunction::AddFactComment, fact.organization_id)?;

        if let Some(reply_to) = request.reply_to {
            if fact.comment(reply_to).is_none() {
                return Err(ServiceError::invalid_argument(ValidationErrors::single(
                    templates::COMMENT_NOT_EXIST,
                    "replyTo",
                )));
            }
        }

        let mut comment = FactCommentRecord::new(
            Uuid::new_v4(),
            self.security.current_user_id(),
            request.comment,
            Utc::now().timestamp_millis(),
        );
        comment.reply_to_id = request.reply_to;

        let stored = self.store.store_fact_comment(&fact, comment).await?;
        debug!(comment = %stored.id, "Added fact comment");
        Ok(self.converter.convert(&stored))
    }
}
