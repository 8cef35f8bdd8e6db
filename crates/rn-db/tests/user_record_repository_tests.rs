mod common;

use common::{create_test_pool, seed_record};

use rn_core::{AuthStatus, InviteQuota, UidSlot};
use rn_db::{InviteOutcome, UserRecordRepository};

use googletest::prelude::*;

#[tokio::test]
async fn given_new_id_when_ensured_then_unverified_record_created() {
    // Given: An empty database
    let pool = create_test_pool().await;
    let repo = UserRecordRepository::new(pool);

    // When: Ensuring a never-seen identifier
    let record = repo.ensure("10001").await.unwrap();

    // Then: A default record exists
    assert_that!(record.id, eq("10001"));
    assert_that!(record.auth_status, eq(AuthStatus::Unverified));
    assert_that!(record.invite_count, eq(0));
    assert_that!(record.real_name, none());
}

#[tokio::test]
async fn given_existing_record_when_ensured_then_state_is_preserved() {
    // Given: A record already promoted past the default status
    let pool = create_test_pool().await;
    seed_record(&pool, "10001", "Verified Enhanced", 3).await;
    let repo = UserRecordRepository::new(pool);

    // When: Ensuring the same identifier again
    let record = repo.ensure("10001").await.unwrap();

    // Then: Nothing was reset
    assert_that!(record.auth_status, eq(AuthStatus::VerifiedEnhanced));
    assert_that!(record.invite_count, eq(3));
}

#[tokio::test]
async fn given_empty_database_when_finding_unknown_id_then_returns_none() {
    let pool = create_test_pool().await;
    let repo = UserRecordRepository::new(pool);

    let result = repo.find_by_id("nope").await.unwrap();

    assert_that!(result, none());
}

#[tokio::test]
async fn given_record_when_identity_submitted_then_pending_review_with_fields() {
    // Given: A lazily-created record
    let pool = create_test_pool().await;
    let repo = UserRecordRepository::new(pool);
    repo.ensure("10001").await.unwrap();

    // When: Writing a validated identity submission
    repo.submit_identity("10001", "张三", "11010519491231002X")
        .await
        .unwrap();

    // Then: Name, ID number, and status are stored
    let record = repo.find_by_id("10001").await.unwrap().unwrap();
    assert_that!(record.real_name, some(eq("张三")));
    assert_that!(record.id_number, some(eq("11010519491231002X")));
    assert_that!(record.auth_status, eq(AuthStatus::PendingReview));
}

#[tokio::test]
async fn given_record_when_status_set_then_it_round_trips() {
    let pool = create_test_pool().await;
    let repo = UserRecordRepository::new(pool);
    repo.ensure("10001").await.unwrap();

    repo.set_status("10001", AuthStatus::VerifiedExempt)
        .await
        .unwrap();

    let record = repo.find_by_id("10001").await.unwrap().unwrap();
    assert_that!(record.auth_status, eq(AuthStatus::VerifiedExempt));
}

#[tokio::test]
async fn given_record_when_uids_bound_then_each_slot_is_independent() {
    let pool = create_test_pool().await;
    let repo = UserRecordRepository::new(pool);
    repo.ensure("10001").await.unwrap();

    repo.bind_uid("10001", UidSlot::Primary, "alpha")
        .await
        .unwrap();
    repo.bind_uid("10001", UidSlot::Tertiary, "gamma")
        .await
        .unwrap();

    let record = repo.find_by_id("10001").await.unwrap().unwrap();
    assert_that!(record.uid1, some(eq("alpha")));
    assert_that!(record.uid2, none());
    assert_that!(record.uid3, some(eq("gamma")));
}

#[tokio::test]
async fn given_inviter_with_quota_when_inviting_then_target_created_and_quota_consumed() {
    // Given: An inviter with headroom
    let pool = create_test_pool().await;
    seed_record(&pool, "10001", "Verified Enhanced", 0).await;
    let repo = UserRecordRepository::new(pool);

    // When: Inviting a brand-new user
    let outcome = repo
        .invite("10001", "20002", InviteQuota::Limited(5))
        .await
        .unwrap();

    // Then: The target exists with the inviter set, and one unit is consumed
    assert_that!(outcome, eq(InviteOutcome::Invited));

    let target = repo.find_by_id("20002").await.unwrap().unwrap();
    assert_that!(target.inviter_id, some(eq("10001")));
    assert_that!(target.auth_status, eq(AuthStatus::Unverified));

    let inviter = repo.find_by_id("10001").await.unwrap().unwrap();
    assert_that!(inviter.invite_count, eq(1));
}

#[tokio::test]
async fn given_target_already_invited_when_inviting_then_nothing_is_consumed() {
    // Given: A target already claimed by another inviter
    let pool = create_test_pool().await;
    seed_record(&pool, "10001", "Verified Enhanced", 0).await;
    seed_record(&pool, "10009", "Verified Enhanced", 0).await;
    let repo = UserRecordRepository::new(pool);
    repo.invite("10009", "20002", InviteQuota::Limited(5))
        .await
        .unwrap();

    // When: A second inviter tries the same target
    let outcome = repo
        .invite("10001", "20002", InviteQuota::Limited(5))
        .await
        .unwrap();

    // Then: The claim stands and the second inviter's quota is untouched
    assert_that!(outcome, eq(InviteOutcome::AlreadyInvited));

    let target = repo.find_by_id("20002").await.unwrap().unwrap();
    assert_that!(target.inviter_id, some(eq("10009")));

    let inviter = repo.find_by_id("10001").await.unwrap().unwrap();
    assert_that!(inviter.invite_count, eq(0));
}

#[tokio::test]
async fn given_exhausted_quota_when_inviting_then_claim_is_rolled_back() {
    // Given: An inviter at their ceiling
    let pool = create_test_pool().await;
    seed_record(&pool, "10001", "Verified Enhanced", 5).await;
    let repo = UserRecordRepository::new(pool);

    // When: Inviting anyway
    let outcome = repo
        .invite("10001", "20002", InviteQuota::Limited(5))
        .await
        .unwrap();

    // Then: No partial state survives; the target keeps no inviter
    assert_that!(outcome, eq(InviteOutcome::QuotaExhausted));

    let target = repo.find_by_id("20002").await.unwrap().unwrap();
    assert_that!(target.inviter_id, none());
}

#[tokio::test]
async fn given_one_unit_of_quota_when_two_concurrent_invites_then_exactly_one_succeeds() {
    // Given: Quota 5 with 4 already consumed
    let pool = create_test_pool().await;
    seed_record(&pool, "10001", "Verified Enhanced", 4).await;
    let repo = UserRecordRepository::new(pool);

    // When: Two invites race for the last unit
    let (first, second) = tokio::join!(
        repo.invite("10001", "20002", InviteQuota::Limited(5)),
        repo.invite("10001", "20003", InviteQuota::Limited(5)),
    );
    let outcomes = [first.unwrap(), second.unwrap()];

    // Then: One commits, the other observes the exhausted quota
    let invited = outcomes
        .iter()
        .filter(|o| **o == InviteOutcome::Invited)
        .count();
    let exhausted = outcomes
        .iter()
        .filter(|o| **o == InviteOutcome::QuotaExhausted)
        .count();
    assert_that!(invited, eq(1));
    assert_that!(exhausted, eq(1));

    let inviter = repo.find_by_id("10001").await.unwrap().unwrap();
    assert_that!(inviter.invite_count, eq(5));
}

#[tokio::test]
async fn given_unlimited_quota_when_inviting_then_count_still_tracks() {
    let pool = create_test_pool().await;
    seed_record(&pool, "90001", "Admin", 0).await;
    let repo = UserRecordRepository::new(pool);

    for target in ["20001", "20002", "20003"] {
        let outcome = repo
            .invite("90001", target, InviteQuota::Unlimited)
            .await
            .unwrap();
        assert_that!(outcome, eq(InviteOutcome::Invited));
    }

    let inviter = repo.find_by_id("90001").await.unwrap().unwrap();
    assert_that!(inviter.invite_count, eq(3));
}

#[tokio::test]
async fn given_no_record_when_upserting_admin_then_admin_record_exists() {
    let pool = create_test_pool().await;
    let repo = UserRecordRepository::new(pool);

    let record = repo.upsert_admin("90001").await.unwrap();

    assert_that!(record.auth_status, eq(AuthStatus::Admin));
}

#[tokio::test]
async fn given_existing_record_when_upserting_admin_then_other_fields_survive() {
    // Given: A record with bound UIDs and consumed invites
    let pool = create_test_pool().await;
    seed_record(&pool, "90001", "Verified Enhanced", 2).await;
    let repo = UserRecordRepository::new(pool);
    repo.bind_uid("90001", UidSlot::Primary, "alpha")
        .await
        .unwrap();

    // When: Promoting it twice
    repo.upsert_admin("90001").await.unwrap();
    let record = repo.upsert_admin("90001").await.unwrap();

    // Then: Only the status changed
    assert_that!(record.auth_status, eq(AuthStatus::Admin));
    assert_that!(record.uid1, some(eq("alpha")));
    assert_that!(record.invite_count, eq(2));
}

#[tokio::test]
async fn given_deleted_inviter_when_reading_invitee_then_inviter_is_nulled() {
    // Given: An invitee referencing its inviter
    let pool = create_test_pool().await;
    seed_record(&pool, "10001", "Verified Enhanced", 0).await;
    let repo = UserRecordRepository::new(pool);
    repo.invite("10001", "20002", InviteQuota::Limited(5))
        .await
        .unwrap();

    // When: The inviter row is deleted
    let deleted = repo.delete("10001").await.unwrap();
    assert_that!(deleted, eq(true));

    // Then: The invitee survives with a null inviter
    let target = repo.find_by_id("20002").await.unwrap().unwrap();
    assert_that!(target.inviter_id, none());
}
