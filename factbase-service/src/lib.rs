//! # Factbase Service
//!
//! The mutation-delegate layer of the factbase platform. Each delegate
//! orchestrates one use case: resolve the target fact, authorize against
//! the per-request security context, validate domain rules, apply the
//! change through the store, and convert the result to a response. Either
//! the whole sequence succeeds or no storage write occurs.

pub mod converters;
pub mod delegates;
pub mod errors;
pub mod requests;
pub mod resolvers;
pub mod responses;
pub mod security;

#[cfg(test)]
pub(crate) mod testing;

pub use converters::{
    AclEntryConverter, AclEntryResponseConverter, FactCommentConverter,
    FactCommentResponseConverter,
};
pub use delegates::{
    FactCreateCommentDelegate, FactGetAclDelegate, FactGetCommentsDelegate,
    FactGrantAccessDelegate,
};
pub use errors::{ServiceError, ValidationError, ValidationErrors};
pub use requests::{
    CreateFactCommentRequest, GetFactAclRequest, GetFactCommentsRequest, GrantFactAccessRequest,
};
pub use responses::{AclEntryResponse, FactCommentResponse};
pub use resolvers::{FactRequestResolver, ResolveFactRequest};
pub use security::RequestSecurityContext;
