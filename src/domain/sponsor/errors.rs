//! Sponsor-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, OsraNumber, SponsorId, ValidationErrors};

/// Errors raised while registering or loading sponsors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SponsorError {
    NotFound(SponsorId),

    /// The record broke one or more rules; carries every violation found.
    Invalid(ValidationErrors),

    OsraNumberAlreadyAssigned(OsraNumber),

    Infrastructure(String),
}

impl SponsorError {
    pub fn infrastructure(message: impl Into<String>) -> Self {
        SponsorError::Infrastructure(message.into())
    }

    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            SponsorError::Invalid(errors) => Some(errors),
            _ => None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SponsorError::NotFound(_) => ErrorCode::SponsorNotFound,
            SponsorError::Invalid(_) => ErrorCode::ValidationFailed,
            SponsorError::OsraNumberAlreadyAssigned(_) => ErrorCode::OsraNumberAlreadyAssigned,
            SponsorError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            SponsorError::NotFound(id) => format!("Sponsor not found: {}", id),
            SponsorError::Invalid(errors) => errors.to_string(),
            SponsorError::OsraNumberAlreadyAssigned(number) => {
                format!("Sponsor already has OSRA number {}", number)
            }
            SponsorError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, SponsorError::Infrastructure(_))
    }
}

impl std::fmt::Display for SponsorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SponsorError {}

impl From<ValidationErrors> for SponsorError {
    fn from(errors: ValidationErrors) -> Self {
        SponsorError::Invalid(errors)
    }
}

impl From<DomainError> for SponsorError {
    fn from(err: DomainError) -> Self {
        SponsorError::Infrastructure(err.to_string())
    }
}

impl From<SponsorError> for DomainError {
    fn from(err: SponsorError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}
