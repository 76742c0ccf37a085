//! Orphan-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound | 404 |
//! | Invalid | 422 |
//! | OsraNumberAlreadyAssigned | 409 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{
    DomainError, ErrorCode, OrphanId, OsraNumber, ValidationErrors,
};

use super::validation::messages;

/// Errors raised while creating, updating or querying orphans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrphanError {
    /// No orphan with this id exists.
    NotFound(OrphanId),

    /// The record broke one or more rules; carries every violation found.
    Invalid(ValidationErrors),

    /// The record already carries an OSRA number.
    OsraNumberAlreadyAssigned(OsraNumber),

    /// Persistence or collaborator failure.
    Infrastructure(String),
}

impl OrphanError {
    pub fn not_found(id: OrphanId) -> Self {
        OrphanError::NotFound(id)
    }

    pub fn invalid(errors: ValidationErrors) -> Self {
        OrphanError::Invalid(errors)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        OrphanError::Infrastructure(message.into())
    }

    /// The accumulated violations, for validation failures.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            OrphanError::Invalid(errors) => Some(errors),
            _ => None,
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            OrphanError::NotFound(_) => ErrorCode::OrphanNotFound,
            OrphanError::Invalid(_) => ErrorCode::ValidationFailed,
            OrphanError::OsraNumberAlreadyAssigned(_) => ErrorCode::OsraNumberAlreadyAssigned,
            OrphanError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            OrphanError::NotFound(id) => format!("Orphan not found: {}", id),
            OrphanError::Invalid(errors) => errors.to_string(),
            OrphanError::OsraNumberAlreadyAssigned(number) => {
                format!("Orphan already has OSRA number {}", number)
            }
            OrphanError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }

    /// Returns true if this error should trigger a retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, OrphanError::Infrastructure(_))
    }
}

impl std::fmt::Display for OrphanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for OrphanError {}

impl From<ValidationErrors> for OrphanError {
    fn from(errors: ValidationErrors) -> Self {
        OrphanError::Invalid(errors)
    }
}

impl From<DomainError> for OrphanError {
    fn from(err: DomainError) -> Self {
        match err.code {
            // The store's unique index lost a race against a concurrent create.
            ErrorCode::DuplicateOrphan => {
                let mut errors = ValidationErrors::new();
                errors.add("name", messages::IDENTITY_TAKEN);
                OrphanError::Invalid(errors)
            }
            ErrorCode::ValidationFailed => {
                let field = err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "base".to_string());
                let mut errors = ValidationErrors::new();
                errors.add(field, err.message);
                OrphanError::Invalid(errors)
            }
            _ => OrphanError::Infrastructure(err.to_string()),
        }
    }
}

impl From<OrphanError> for DomainError {
    fn from(err: OrphanError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}
