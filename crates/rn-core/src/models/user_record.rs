use crate::models::auth_status::{AuthStatus, InviteQuota};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One record per distinct user identifier. The identifier is an opaque
/// platform string (a numeric QQ ID or an openid), never assumed numeric.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub real_name: Option<String>,
    pub id_number: Option<String>,
    pub uid1: Option<String>,
    pub uid2: Option<String>,
    pub uid3: Option<String>,
    pub auth_status: AuthStatus,
    pub inviter_id: Option<String>,
    pub invite_count: i64,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// Lazily-created record for a user seen for the first time.
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            real_name: None,
            id_number: None,
            uid1: None,
            uid2: None,
            uid3: None,
            auth_status: AuthStatus::Unverified,
            inviter_id: None,
            invite_count: 0,
            created_at: Utc::now(),
        }
    }

    /// Invite-time quota gate. The store layer re-checks this atomically
    /// when the count is incremented.
    pub fn can_invite(&self) -> bool {
        match self.auth_status.invite_quota() {
            InviteQuota::Unlimited => true,
            InviteQuota::Limited(quota) => self.invite_count < i64::from(quota),
        }
    }
}
