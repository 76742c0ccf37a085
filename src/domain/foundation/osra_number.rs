//! OSRA numbers: business identifiers built from an origin code and a
//! per-scope sequence number.
//!
//! Each record kind encodes its origin differently, so numbering is
//! expressed through the [`OsraNumberFormat`] trait:
//!
//! | Format | Scope key | Layout |
//! |--------|-----------|--------|
//! | [`ProvinceNumbering`] | `orphan:{province}` | `{province}{seq:05}` |
//! | [`ChannelNumbering`] | `sponsor:{digit}{code:02}` | `{digit}{code:02}{seq:04}` |

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ProvinceCode, ValidationError};

/// Largest branch or organization code that fits the two-digit slot of a
/// sponsor number.
pub const MAX_CHANNEL_CODE: u32 = 99;

/// Assigned business identifier of an orphan or sponsor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OsraNumber(String);

impl OsraNumber {
    /// Wraps an already-rendered number (e.g. loaded from storage).
    pub fn from_string(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OsraNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Key of an independent sequence counter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SequenceScope(String);

impl SequenceScope {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SequenceScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Entity-specific layout of an OSRA number.
pub trait OsraNumberFormat {
    /// Counter scope the sequence number is drawn from.
    fn scope(&self) -> SequenceScope;

    /// Renders the identifier for an allocated sequence number.
    fn render(&self, sequence: u32) -> OsraNumber;
}

/// Orphan numbering: province code followed by a 5-digit sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvinceNumbering {
    province_code: ProvinceCode,
}

impl ProvinceNumbering {
    pub fn new(province_code: ProvinceCode) -> Self {
        Self { province_code }
    }
}

impl OsraNumberFormat for ProvinceNumbering {
    fn scope(&self) -> SequenceScope {
        SequenceScope::new(format!("orphan:{}", self.province_code))
    }

    fn render(&self, sequence: u32) -> OsraNumber {
        OsraNumber(format!("{}{:05}", self.province_code, sequence))
    }
}

/// How a sponsor was recruited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecruitmentChannel {
    /// Recruited by an OSRA branch.
    Branch,
    /// Recruited by a sister organization.
    Organization,
}

impl RecruitmentChannel {
    /// Leading digit of sponsor numbers recruited through this channel.
    pub fn prefix_digit(&self) -> char {
        match self {
            RecruitmentChannel::Branch => '5',
            RecruitmentChannel::Organization => '8',
        }
    }
}

/// Sponsor numbering: channel digit, 2-digit branch/organization code and a
/// 4-digit sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelNumbering {
    channel: RecruitmentChannel,
    code: u32,
}

impl ChannelNumbering {
    /// # Errors
    ///
    /// `OutOfRange` when `code` does not fit in two digits.
    pub fn new(channel: RecruitmentChannel, code: u32) -> Result<Self, ValidationError> {
        if code > MAX_CHANNEL_CODE {
            return Err(ValidationError::out_of_range(
                "code",
                0,
                MAX_CHANNEL_CODE as i32,
                i32::try_from(code).unwrap_or(i32::MAX),
            ));
        }
        Ok(Self { channel, code })
    }

    fn prefix(&self) -> String {
        format!("{}{:02}", self.channel.prefix_digit(), self.code)
    }
}

impl OsraNumberFormat for ChannelNumbering {
    fn scope(&self) -> SequenceScope {
        SequenceScope::new(format!("sponsor:{}", self.prefix()))
    }

    fn render(&self, sequence: u32) -> OsraNumber {
        OsraNumber(format!("{}{:04}", self.prefix(), sequence))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn province(code: &str) -> ProvinceCode {
        ProvinceCode::new(code).unwrap()
    }

    #[test]
    fn province_numbering_pads_to_five_digits() {
        let numbering = ProvinceNumbering::new(province("AB"));
        assert_eq!(numbering.render(1).as_str(), "AB00001");
        assert_eq!(numbering.render(2).as_str(), "AB00002");
        assert_eq!(numbering.render(12345).as_str(), "AB12345");
    }

    #[test]
    fn province_numbering_scopes_by_province() {
        let ab = ProvinceNumbering::new(province("AB"));
        let cd = ProvinceNumbering::new(province("CD"));
        assert_ne!(ab.scope(), cd.scope());
        assert_eq!(ab.scope().as_str(), "orphan:AB");
    }

    fn channel(channel: RecruitmentChannel, code: u32) -> ChannelNumbering {
        ChannelNumbering::new(channel, code).unwrap()
    }

    #[test]
    fn branch_numbering_starts_with_five() {
        let number = channel(RecruitmentChannel::Branch, 3).render(999);
        assert_eq!(number.as_str(), "5030999");
        assert_eq!(&number.as_str()[0..1], "5");
        assert_eq!(&number.as_str()[1..3], "03");
        assert_eq!(&number.as_str()[3..], "0999");
    }

    #[test]
    fn organization_numbering_starts_with_eight() {
        let number = channel(RecruitmentChannel::Organization, 12).render(7);
        assert_eq!(number.as_str(), "8120007");
    }

    #[test]
    fn channel_code_must_fit_two_digits() {
        let widest = channel(RecruitmentChannel::Branch, MAX_CHANNEL_CODE).render(1);
        assert_eq!(widest.as_str(), "5990001");

        let err = ChannelNumbering::new(RecruitmentChannel::Branch, 100).unwrap_err();
        assert_eq!(err, ValidationError::out_of_range("code", 0, 99, 100));
    }

    #[test]
    fn channel_scopes_do_not_collide() {
        let branch = channel(RecruitmentChannel::Branch, 1);
        let organization = channel(RecruitmentChannel::Organization, 1);
        assert_ne!(branch.scope(), organization.scope());
    }
}
