//! Record and value types for facts, objects, and their metadata.

mod access_mode;
mod acl_entry;
mod comment;
mod fact;
mod object;
mod property;
mod subject;
mod type_info;

pub use access_mode::AccessMode;
pub use acl_entry::FactAclEntryRecord;
pub use comment::FactCommentRecord;
pub use fact::FactRecord;
pub use object::ObjectRecord;
pub use property::{PropertyEntry, PropertyValue};
pub use subject::Subject;
pub use type_info::{FactTypeStruct, ObjectTypeStruct};
