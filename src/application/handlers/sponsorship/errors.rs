//! Errors of the sponsorship handlers.

use crate::domain::foundation::{
    DomainError, ErrorCode, OrphanId, SponsorId, SponsorshipId, ValidationErrors,
};

#[derive(Debug, Clone)]
pub enum SponsorshipError {
    OrphanNotFound(OrphanId),
    SponsorNotFound(SponsorId),
    SponsorshipNotFound(SponsorshipId),
    /// The orphan is inactive or already sponsored.
    OrphanNotEligible(OrphanId),
    /// The sponsor is not active.
    SponsorNotEligible(SponsorId),
    Invalid(ValidationErrors),
    Domain(DomainError),
}

impl SponsorshipError {
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            SponsorshipError::Invalid(errors) => Some(errors),
            _ => None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SponsorshipError::OrphanNotFound(_) => ErrorCode::OrphanNotFound,
            SponsorshipError::SponsorNotFound(_) => ErrorCode::SponsorNotFound,
            SponsorshipError::SponsorshipNotFound(_) => ErrorCode::SponsorshipNotFound,
            SponsorshipError::OrphanNotEligible(_) | SponsorshipError::SponsorNotEligible(_) => {
                ErrorCode::InvalidStateTransition
            }
            SponsorshipError::Invalid(_) => ErrorCode::ValidationFailed,
            SponsorshipError::Domain(err) => err.code,
        }
    }
}

impl std::fmt::Display for SponsorshipError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SponsorshipError::OrphanNotFound(id) => write!(f, "Orphan not found: {}", id),
            SponsorshipError::SponsorNotFound(id) => write!(f, "Sponsor not found: {}", id),
            SponsorshipError::SponsorshipNotFound(id) => {
                write!(f, "Sponsorship not found: {}", id)
            }
            SponsorshipError::OrphanNotEligible(id) => {
                write!(f, "Orphan {} is not eligible for sponsorship", id)
            }
            SponsorshipError::SponsorNotEligible(id) => {
                write!(f, "Sponsor {} is not eligible to sponsor", id)
            }
            SponsorshipError::Invalid(errors) => write!(f, "{}", errors),
            SponsorshipError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SponsorshipError {}

impl From<DomainError> for SponsorshipError {
    fn from(err: DomainError) -> Self {
        SponsorshipError::Domain(err)
    }
}
