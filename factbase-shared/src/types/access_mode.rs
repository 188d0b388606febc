use serde::{Deserialize, Serialize};
use std::fmt;

// String representations stored alongside facts and exposed as the
// "accessMode" graph property.
pub const ACCESS_MODE_PUBLIC: &str = "Public";
pub const ACCESS_MODE_ROLE_BASED: &str = "RoleBased";
pub const ACCESS_MODE_EXPLICIT: &str = "Explicit";

/// Visibility mode of a fact.
///
/// `Public` facts are world-readable, `RoleBased` facts are gated on roles
/// or an explicit grant, and `Explicit` facts are readable only by subjects
/// listed in the fact's ACL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessMode {
    Public,
    RoleBased,
    Explicit,
}

impl Default for AccessMode {
    fn default() -> Self {
        AccessMode::RoleBased
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl AsRef<str> for AccessMode {
    fn as_ref(&self) -> &str {
        match self {
            AccessMode::Public => ACCESS_MODE_PUBLIC,
            AccessMode::RoleBased => ACCESS_MODE_ROLE_BASED,
            AccessMode::Explicit => ACCESS_MODE_EXPLICIT,
        }
    }
}

impl std::convert::TryFrom<&str> for AccessMode {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            ACCESS_MODE_PUBLIC => Ok(AccessMode::Public),
            ACCESS_MODE_ROLE_BASED => Ok(AccessMode::RoleBased),
            ACCESS_MODE_EXPLICIT => Ok(AccessMode::Explicit),
            _ => Err(format!("Unknown access mode: {}", value)),
        }
    }
}
