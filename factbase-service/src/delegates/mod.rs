//! One delegate per use case.
//!
//! Every delegate runs the same sequence: resolve the target fact,
//! authorize against the security context, validate domain rules, apply
//! the change through the store, convert the final record to a response.
//! A failure at any step leaves storage untouched.

mod fact_create_comment;
mod fact_get_acl;
mod fact_get_comments;
mod fact_grant_access;

pub use fact_create_comment::FactCreateCommentDelegate;
pub use fact_get_acl::FactGetAclDelegate;
pub use fact_get_comments::FactGetCommentsDelegate;
pub use fact_grant_access::FactGrantAccessDelegate;
