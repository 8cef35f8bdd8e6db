pub mod authz;
pub mod error;
pub mod identity;
pub mod masking;
pub mod models;

#[cfg(test)]
mod tests;

pub use authz::{
    AuthzRequest, ChannelKind, Command, Decision, DenyReason, Privilege, UidSlot, authorize,
};
pub use error::{CoreError, Result as CoreResult};
pub use identity::{validate, validate_id_number, validate_real_name};
pub use masking::{DisplayRecord, View, render};
pub use models::auth_status::{AuthStatus, InviteQuota};
pub use models::user_record::UserRecord;
