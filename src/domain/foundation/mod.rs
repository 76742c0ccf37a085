//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, date rules, OSRA number formats and
//! error types that form the vocabulary of the OSRA domain.

mod dates;
mod errors;
mod ids;
mod osra_number;
mod province;
pub mod rules;
mod timestamp;

pub use dates::{add_years, born_within_years_of, is_in_future, reached_age_by, DateValue, DATE_FORMAT};
pub use errors::{DomainError, ErrorCode, FieldError, ValidationError, ValidationErrors};
pub use ids::{BranchId, OrganizationId, OrphanId, OrphanListId, PartnerId, SponsorId, SponsorshipId};
pub use osra_number::{
    ChannelNumbering, OsraNumber, OsraNumberFormat, ProvinceNumbering, RecruitmentChannel,
    SequenceScope, MAX_CHANNEL_CODE,
};
pub use province::ProvinceCode;
pub use timestamp::Timestamp;
