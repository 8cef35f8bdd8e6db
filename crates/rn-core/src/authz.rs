//! The authorization engine.
//!
//! All permission rules live in the single [`authorize`] function: one
//! declarative decision over (actor snapshot, target, command, channel),
//! instead of per-handler privilege checks. The function is pure and
//! synchronous; callers take the snapshots before asking.

use crate::models::user_record::UserRecord;

use serde::{Deserialize, Serialize};

/// Where a command arrived from. Group channels are public, and commands
/// that echo unmasked identity data refuse to run there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    Private,
    Group,
}

/// External account slot bound with `binduid1/2/3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UidSlot {
    Primary,
    Secondary,
    Tertiary,
}

impl UidSlot {
    pub fn number(&self) -> u8 {
        match self {
            Self::Primary => 1,
            Self::Secondary => 2,
            Self::Tertiary => 3,
        }
    }
}

/// Commands understood by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    SubmitAuth,
    GetAuth,
    AdminGetAuth,
    SetAuthStatus,
    Invite,
    BindUid(UidSlot),
    InitAdmin,
}

impl Command {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "help" => Some(Self::Help),
            "auth" => Some(Self::SubmitAuth),
            "getauth" => Some(Self::GetAuth),
            "admingetauth" => Some(Self::AdminGetAuth),
            "setauthstats" => Some(Self::SetAuthStatus),
            "invite" => Some(Self::Invite),
            "binduid1" => Some(Self::BindUid(UidSlot::Primary)),
            "binduid2" => Some(Self::BindUid(UidSlot::Secondary)),
            "binduid3" => Some(Self::BindUid(UidSlot::Tertiary)),
            "initadmin" => Some(Self::InitAdmin),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::SubmitAuth => "auth",
            Self::GetAuth => "getauth",
            Self::AdminGetAuth => "admingetauth",
            Self::SetAuthStatus => "setauthstats",
            Self::Invite => "invite",
            Self::BindUid(UidSlot::Primary) => "binduid1",
            Self::BindUid(UidSlot::Secondary) => "binduid2",
            Self::BindUid(UidSlot::Tertiary) => "binduid3",
            Self::InitAdmin => "initadmin",
        }
    }
}

/// Actor privilege relative to a target, computed once per request.
/// Ordered so that a comparison expresses "at least this tier".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Privilege {
    Other,
    Myself,
    Admin,
    Owner,
}

impl Privilege {
    /// Maximum of: platform-configured owner, stored `Admin` status, and
    /// self-targeting. The owner tier needs no stored record at all.
    pub fn compute(
        actor_id: &str,
        target_id: &str,
        actor: Option<&UserRecord>,
        owner_ids: &[String],
    ) -> Self {
        if owner_ids.iter().any(|owner| owner == actor_id) {
            return Self::Owner;
        }
        if actor.is_some_and(|record| record.auth_status.is_admin()) {
            return Self::Admin;
        }
        if actor_id == target_id {
            return Self::Myself;
        }
        Self::Other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    InsufficientPrivilege,
    ChannelNotAllowed,
    QuotaExhausted,
    NotBootstrapped,
}

/// Everything [`authorize`] is allowed to look at.
#[derive(Debug)]
pub struct AuthzRequest<'a> {
    pub command: Command,
    pub channel: ChannelKind,
    pub privilege: Privilege,
    /// Actor and target resolve to the same user identifier.
    pub self_target: bool,
    /// Actor's stored record, if one exists. Consulted for the invite
    /// quota gate only.
    pub actor: Option<&'a UserRecord>,
}

/// The permission matrix. Side-effect free; one reply per decision.
pub fn authorize(req: &AuthzRequest<'_>) -> Decision {
    use DenyReason::*;

    // Private-only commands refuse group channels before any privilege
    // consideration, owner included.
    if req.command == Command::AdminGetAuth && req.channel == ChannelKind::Group {
        return Decision::Deny(ChannelNotAllowed);
    }

    // Owner bypass: ambient authority from platform configuration.
    if req.privilege == Privilege::Owner {
        return Decision::Allow;
    }

    match req.command {
        Command::Help => Decision::Allow,

        // Identity submission and UID binding act on the actor's own record.
        Command::SubmitAuth | Command::BindUid(_) => {
            if req.self_target {
                Decision::Allow
            } else {
                Decision::Deny(InsufficientPrivilege)
            }
        }

        Command::GetAuth => {
            if req.self_target || req.privilege >= Privilege::Admin {
                Decision::Allow
            } else {
                Decision::Deny(InsufficientPrivilege)
            }
        }

        Command::AdminGetAuth | Command::SetAuthStatus => {
            if req.privilege >= Privilege::Admin {
                Decision::Allow
            } else {
                Decision::Deny(InsufficientPrivilege)
            }
        }

        // Anyone may invite on their own quota; the gate distinguishes a
        // missing record from an exhausted quota.
        Command::Invite => match req.actor {
            None => Decision::Deny(NotBootstrapped),
            Some(record) => {
                if record.can_invite() {
                    Decision::Allow
                } else {
                    Decision::Deny(QuotaExhausted)
                }
            }
        },

        Command::InitAdmin => Decision::Deny(InsufficientPrivilege),
    }
}
