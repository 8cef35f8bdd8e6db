//! Every user-facing reply line in one place.

use rn_core::{DenyReason, DisplayRecord, UidSlot};

pub const VALID_STATUSES: &str = "Unverified, Pending Review, Verified, \
     Verified Enhanced, Verified Exempt, Banned, Admin";

pub const USAGE_AUTH: &str = "Usage: auth [Name] [ID Number]";
pub const USAGE_SETAUTHSTATS: &str = "Usage: setauthstats [@user or ID] [Status]";
pub const USAGE_INVITE: &str = "Usage: invite [@user or ID]";
pub const USAGE_ADMINGETAUTH: &str = "Usage: admingetauth [@user or ID]";

pub const ALREADY_SUBMITTED: &str = "You have already submitted authentication information.";
pub const NOT_INVITED: &str = "You are not an invited user and cannot register at this time.";
pub const SUBMISSION_ACCEPTED: &str =
    "Submission successful! Please await administrator review.";
pub const STATUS_UPDATED: &str = "Status updated successfully.";
pub const ALREADY_HAS_INVITER: &str = "Target user already has an inviter.";
pub const CANNOT_INVITE_SELF: &str = "You cannot invite yourself.";
pub const ADMIN_INITIALISED: &str = "Admin account initialised successfully.";
pub const RECORD_NOT_FOUND: &str = "No record found for the specified user.";
pub const STORE_UNAVAILABLE: &str = "Service temporarily unavailable. Please try again later.";
pub const MALFORMED_PAYLOAD: &str = "Malformed command payload.";

pub fn denied(reason: DenyReason) -> &'static str {
    match reason {
        DenyReason::InsufficientPrivilege => "Insufficient privileges.",
        DenyReason::ChannelNotAllowed => "This command can only be used in private messages.",
        DenyReason::QuotaExhausted => "You have reached your invitation quota.",
        DenyReason::NotBootstrapped => "You have no record in the system.",
    }
}

pub fn unknown_command(name: &str) -> String {
    format!("Unknown command: {name}. Send 'help' for the list of commands.")
}

pub fn usage_binduid(slot: UidSlot) -> String {
    format!("Usage: binduid{} [UID]", slot.number())
}

pub fn uid_bound(slot: UidSlot) -> String {
    format!("UID{} bound successfully.", slot.number())
}

pub fn invited(target_id: &str) -> String {
    format!("Invitation sent to {target_id} successfully.")
}

pub fn help() -> String {
    "The following commands are available:\n\
     getauth: Query your authentication status\n\
     auth [Name] [ID Number]: Submit your authentication information\n\
     invite [@user or ID]: Invite a user\n\
     binduid1 [UID]: Bind your primary UID\n\
     binduid2 [UID]: Bind your secondary UID\n\
     binduid3 [UID]: Bind your tertiary UID"
        .to_string()
}

pub fn format_record(record: &DisplayRecord) -> String {
    format!(
        "Authentication status: {}\n\
         Name: {}\n\
         ID Number: {}\n\
         Bound UID1: {}\n\
         Bound UID2: {}\n\
         Bound UID3: {}\n\
         Number of Invites: {}\n\
         Inviter: {}\n\
         Invitation Quota: {}",
        record.auth_status,
        record.real_name,
        record.id_number,
        record.uid1,
        record.uid2,
        record.uid3,
        record.invite_count,
        record.inviter_id,
        record.invite_quota,
    )
}
