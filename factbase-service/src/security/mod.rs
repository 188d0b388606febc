//! Concrete per-request security context.

use factbase_repository::errors::AccessDenied;
use factbase_repository::interfaces::{FactFunction, SecurityContext};
use factbase_shared::types::{AccessMode, FactRecord};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// The acting identity's authority, resolved once per inbound request.
///
/// Holds the identity's id, the subject ids it acts as (itself plus any
/// groups) for ACL matching, and the function permissions it has been
/// granted per organization. Read-only after construction.
pub struct RequestSecurityContext {
    user_id: Uuid,
    subject_ids: HashSet<Uuid>,
    permissions: HashMap<Uuid, HashSet<FactFunction>>,
}

impl RequestSecurityContext {
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            subject_ids: HashSet::from([user_id]),
            permissions: HashMap::new(),
        }
    }

    /// Additionally act as the given subject (e.g. a group membership).
    pub fn with_subject(mut self, subject_id: Uuid) -> Self {
        self.subject_ids.insert(subject_id);
        self
    }

    /// Grant a function permission within an organization.
    pub fn with_permission(mut self, organization_id: Uuid, function: FactFunction) -> Self {
        self.permissions
            .entry(organization_id)
            .or_default()
            .insert(function);
        self
    }

    fn has_function(&self, function: FactFunction, organization_id: Uuid) -> bool {
        self.permissions
            .get(&organization_id)
            .is_some_and(|functions| functions.contains(&function))
    }

    fn in_acl(&self, fact: &FactRecord) -> bool {
        fact.acl
            .iter()
            .any(|entry| self.subject_ids.contains(&entry.subject_id))
    }
}

impl SecurityContext for RequestSecurityContext {
    fn check_read_permission(&self, fact: &FactRecord) -> Result<(), AccessDenied> {
        let readable = match fact.access_mode {
            AccessMode::Public => true,
            AccessMode::Explicit => self.in_acl(fact),
            AccessMode::RoleBased => {
                self.in_acl(fact) || self.has_function(FactFunction::ViewFact, fact.organization_id)
            }
        };
        if readable {
            Ok(())
        } else {
            Err(AccessDenied::new(format!(
                "No read access to fact {}",
                fact.id
            )))
        }
    }

    fn check_permission(
        &self,
        function: FactFunction,
        organization_id: Uuid,
    ) -> Result<(), AccessDenied> {
        if self.has_function(function, organization_id) {
            Ok(())
        } else {
            Err(AccessDenied::new(format!(
                "Missing function permission '{}' in organization {}",
                function, organization_id
            )))
        }
    }

    fn current_user_id(&self) -> Uuid {
        self.user_id
    }
}
