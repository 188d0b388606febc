//! Error types for the delegate layer.
//!
//! Permission failures and validation failures are distinct variants so a
//! caller can render forbidden and bad-request responses appropriately.
//! Validation checks that are independent of each other are evaluated
//! together and reported as one accumulated set of named errors.

use factbase_repository::errors::{AccessDenied, StoreError};
use std::fmt;
use thiserror::Error;

/// Stable machine-readable tags carried by validation errors.
pub mod templates {
    pub const FACT_NOT_EXIST: &str = "fact.not.exist";
    pub const FACT_IS_PUBLIC: &str = "fact.is.public";
    pub const SUBJECT_NOT_EXIST: &str = "subject.not.exist";
    pub const COMMENT_NOT_EXIST: &str = "comment.not.exist";
}

/// One named validation failure, tied to the request field that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub template: String,
    pub field: String,
}

impl ValidationError {
    pub fn new(template: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            field: field.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.template, self.field)
    }
}

/// The ordered set of validation failures of one rejected request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn single(template: impl Into<String>, field: impl Into<String>) -> Self {
        Self(vec![ValidationError::new(template, field)])
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// The templates of all carried errors, in order.
    pub fn templates(&self) -> Vec<&str> {
        self.0.iter().map(|error| error.template.as_str()).collect()
    }
}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self(errors)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.0.iter().map(ValidationError::to_string).collect();
        write!(f, "{}", rendered.join(", "))
    }
}

/// Errors surfaced by the delegates.
#[derive(Debug, Error, PartialEq)]
pub enum ServiceError {
    /// The acting identity lacks read or function permission. Propagated
    /// unchanged from the security context; the request fails entirely.
    #[error(transparent)]
    AccessDenied(#[from] AccessDenied),

    /// The request failed one or more validation checks. No storage
    /// mutation has occurred.
    #[error("Invalid request: {0}")]
    InvalidArgument(ValidationErrors),

    /// The store failed while applying an authorized, validated change.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl ServiceError {
    /// Create an invalid-argument error from accumulated checks.
    pub fn invalid_argument(errors: impl Into<ValidationErrors>) -> Self {
        Self::InvalidArgument(errors.into())
    }

    /// The carried validation errors, when this is an invalid-argument.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::InvalidArgument(errors) => Some(errors),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulated_errors_keep_order() {
        let errors = ValidationErrors::from(vec![
            ValidationError::new(templates::FACT_IS_PUBLIC, "fact"),
            ValidationError::new(templates::SUBJECT_NOT_EXIST, "subject"),
        ]);
        assert_eq!(
            errors.templates(),
            vec![templates::FACT_IS_PUBLIC, templates::SUBJECT_NOT_EXIST]
        );
    }

    #[test]
    fn test_display_renders_template_and_field() {
        let error = ServiceError::invalid_argument(ValidationErrors::single(
            templates::FACT_IS_PUBLIC,
            "fact",
        ));
        assert_eq!(error.to_string(), "Invalid request: fact.is.public (fact)");
    }
}
