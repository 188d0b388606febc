//! The per-request security context contract.
//!
//! Both the graph adapter (meta-fact visibility at traversal time) and the
//! mutation delegates consume this contract. The context is resolved once
//! per inbound request and is read-only afterwards.

use factbase_shared::types::FactRecord;
use std::fmt;
use uuid::Uuid;

use crate::errors::AccessDenied;

/// Named function permissions checked against an organization scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactFunction {
    ViewFact,
    ViewFactAccess,
    GrantFactAccess,
    ViewFactComment,
    AddFactComment,
}

impl fmt::Display for FactFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FactFunction::ViewFact => "viewFact",
            FactFunction::ViewFactAccess => "viewFactAccess",
            FactFunction::GrantFactAccess => "grantFactAccess",
            FactFunction::ViewFactComment => "viewFactComment",
            FactFunction::AddFactComment => "addFactComment",
        };
        write!(f, "{}", name)
    }
}

/// The acting identity's authority for one request.
///
/// Answers read-permission checks against fact records and function
/// permission checks against organization scopes. Implementations hold only
/// in-memory state, so the checks are synchronous.
pub trait SecurityContext: Send + Sync {
    /// Fail with [`AccessDenied`] when the acting identity cannot read the
    /// given fact, based on its access mode, its ACL, and the identity's
    /// roles and grants.
    fn check_read_permission(&self, fact: &FactRecord) -> Result<(), AccessDenied>;

    /// Non-failing form of [`Self::check_read_permission`], used when
    /// unreadable records are filtered rather than rejected.
    fn has_read_permission(&self, fact: &FactRecord) -> bool {
        self.check_read_permission(fact).is_ok()
    }

    /// Fail with [`AccessDenied`] when the acting identity lacks the named
    /// function permission within the given organization.
    fn check_permission(
        &self,
        function: FactFunction,
        organization_id: Uuid,
    ) -> Result<(), AccessDenied>;

    /// The acting identity's id, used as the origin of records created on
    /// its behalf.
    fn current_user_id(&self) -> Uuid;
}
