//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an identifier from an existing UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

uuid_id!(
    /// Unique identifier for an orphan record.
    OrphanId
);

uuid_id!(
    /// Unique identifier for a sponsor record.
    SponsorId
);

uuid_id!(
    /// Unique identifier for a sponsorship linking a sponsor to an orphan.
    SponsorshipId
);

uuid_id!(
    /// Unique identifier for a partner organization.
    PartnerId
);

uuid_id!(
    /// Unique identifier for a list of orphans submitted by a partner.
    OrphanListId
);

uuid_id!(
    /// Unique identifier for an OSRA branch.
    BranchId
);

uuid_id!(
    /// Unique identifier for a sister organization.
    OrganizationId
);
