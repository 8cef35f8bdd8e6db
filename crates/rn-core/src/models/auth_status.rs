use crate::error::{CoreError, Result as CoreResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Authentication status of a user record, ordered by increasing trust.
///
/// `Admin` is a privilege tier rather than a step in the trust progression;
/// it is never the outcome of a review, only of `setauthstats`/`initadmin`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum AuthStatus {
    #[default]
    #[serde(rename = "Unverified")]
    Unverified,
    #[serde(rename = "Pending Review")]
    PendingReview,
    #[serde(rename = "Verified")]
    Verified,
    #[serde(rename = "Verified Enhanced")]
    VerifiedEnhanced,
    #[serde(rename = "Verified Exempt")]
    VerifiedExempt,
    #[serde(rename = "Banned")]
    Banned,
    #[serde(rename = "Admin")]
    Admin,
}

/// Invitation ceiling implied by an [`AuthStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InviteQuota {
    Limited(u32),
    Unlimited,
}

impl AuthStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unverified => "Unverified",
            Self::PendingReview => "Pending Review",
            Self::Verified => "Verified",
            Self::VerifiedEnhanced => "Verified Enhanced",
            Self::VerifiedExempt => "Verified Exempt",
            Self::Banned => "Banned",
            Self::Admin => "Admin",
        }
    }

    /// Fixed quota table. The quota is a gate applied at invite time; a
    /// later status downgrade does not claw back consumed invitations.
    pub fn invite_quota(&self) -> InviteQuota {
        match self {
            Self::VerifiedEnhanced | Self::VerifiedExempt => InviteQuota::Limited(5),
            Self::Admin => InviteQuota::Unlimited,
            Self::Unverified | Self::PendingReview | Self::Verified | Self::Banned => {
                InviteQuota::Limited(0)
            }
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl FromStr for AuthStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "Unverified" => Ok(Self::Unverified),
            "Pending Review" => Ok(Self::PendingReview),
            "Verified" => Ok(Self::Verified),
            "Verified Enhanced" => Ok(Self::VerifiedEnhanced),
            "Verified Exempt" => Ok(Self::VerifiedExempt),
            "Banned" => Ok(Self::Banned),
            "Admin" => Ok(Self::Admin),
            _ => Err(CoreError::InvalidAuthStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl fmt::Display for AuthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for InviteQuota {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Limited(n) => write!(f, "{n}"),
            Self::Unlimited => f.write_str("Unlimited"),
        }
    }
}
