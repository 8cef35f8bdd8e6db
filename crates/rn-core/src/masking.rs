//! Display rendering of a user record for a given viewer.
//!
//! Only the real name and the ID number are sensitive. UID bindings,
//! status, inviter, and counters render identically in both views.

use crate::models::user_record::UserRecord;

pub const MASKED_NAME: &str = "***";
const MISSING: &str = "N/A";

/// How much of a record the viewer is entitled to see. `Unmasked` is only
/// granted to `admingetauth` after it passed authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Masked,
    Unmasked,
}

/// A record flattened to display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    pub id: String,
    pub real_name: String,
    pub id_number: String,
    pub uid1: String,
    pub uid2: String,
    pub uid3: String,
    pub auth_status: String,
    pub inviter_id: String,
    pub invite_count: i64,
    pub invite_quota: String,
}

pub fn render(record: &UserRecord, view: View) -> DisplayRecord {
    let real_name = match (&record.real_name, view) {
        (None, _) => MISSING.to_string(),
        (Some(name), View::Unmasked) => name.clone(),
        (Some(_), View::Masked) => MASKED_NAME.to_string(),
    };

    let id_number = match (&record.id_number, view) {
        (None, _) => MISSING.to_string(),
        (Some(id), View::Unmasked) => id.clone(),
        (Some(id), View::Masked) => mask_id_number(id),
    };

    DisplayRecord {
        id: record.id.clone(),
        real_name,
        id_number,
        uid1: record.uid1.clone().unwrap_or_else(|| "none".to_string()),
        uid2: record.uid2.clone().unwrap_or_else(|| "none".to_string()),
        uid3: record.uid3.clone().unwrap_or_else(|| "none".to_string()),
        auth_status: record.auth_status.as_str().to_string(),
        inviter_id: record
            .inviter_id
            .clone()
            .unwrap_or_else(|| "none".to_string()),
        invite_count: record.invite_count,
        invite_quota: record.auth_status.invite_quota().to_string(),
    }
}

/// First and last characters survive; the middle is always seven stars, so
/// the token is nine characters wide regardless of the stored length.
pub fn mask_id_number(id_number: &str) -> String {
    let mut chars = id_number.chars();
    let first = chars.next().unwrap_or('*');
    let last = chars.next_back().unwrap_or(first);
    format!("{first}*******{last}")
}
