use crate::models::auth_status::AuthStatus;
use crate::models::user_record::UserRecord;

fn record(status: AuthStatus, invite_count: i64) -> UserRecord {
    UserRecord {
        auth_status: status,
        invite_count,
        ..UserRecord::new("10001")
    }
}

#[test]
fn test_new_record_defaults() {
    let record = UserRecord::new("10001");
    assert_eq!(record.id, "10001");
    assert_eq!(record.auth_status, AuthStatus::Unverified);
    assert_eq!(record.invite_count, 0);
    assert!(record.real_name.is_none());
    assert!(record.inviter_id.is_none());
}

#[test]
fn test_can_invite_under_quota() {
    assert!(record(AuthStatus::VerifiedEnhanced, 0).can_invite());
    assert!(record(AuthStatus::VerifiedEnhanced, 4).can_invite());
    assert!(!record(AuthStatus::VerifiedEnhanced, 5).can_invite());
}

#[test]
fn test_zero_quota_statuses_cannot_invite() {
    assert!(!record(AuthStatus::Unverified, 0).can_invite());
    assert!(!record(AuthStatus::Verified, 0).can_invite());
    assert!(!record(AuthStatus::Banned, 0).can_invite());
}

#[test]
fn test_admin_quota_is_unlimited() {
    assert!(record(AuthStatus::Admin, 10_000).can_invite());
}

#[test]
fn test_can_invite_is_monotonic_in_status() {
    // Raising Verified to VerifiedEnhanced never turns an allowed invite
    // into a denial at the same count; lowering never grants one.
    for count in 0..6 {
        let low = record(AuthStatus::Verified, count).can_invite();
        let high = record(AuthStatus::VerifiedEnhanced, count).can_invite();
        assert!(!low || high);
    }
}
