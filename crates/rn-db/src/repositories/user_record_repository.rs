use crate::error::{DbError, Result as DbErrorResult};

use rn_core::{AuthStatus, InviteQuota, UidSlot, UserRecord};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const SELECT_RECORD: &str = "
    SELECT id, real_name, id_number, uid1, uid2, uid3,
           auth_status, inviter_id, invite_count, created_at
    FROM user_records
    WHERE id = ?
";

/// Outcome of the transactional invite sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InviteOutcome {
    Invited,
    /// The target already carries an inviter; nothing was consumed.
    AlreadyInvited,
    /// The conditional increment found the inviter at their quota.
    QuotaExhausted,
}

/// The record store: all reads and writes of `user_records`, keyed by the
/// opaque user identifier. Read-modify-write sequences that must not lose
/// updates under concurrency run as single conditional statements or as
/// one transaction here.
pub struct UserRecordRepository {
    pool: SqlitePool,
}

impl UserRecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: &str) -> DbErrorResult<Option<UserRecord>> {
        let row = sqlx::query(SELECT_RECORD)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| map_record(&r)).transpose()
    }

    /// Idempotent lazy creation: inserts an `Unverified` record if none
    /// exists, then returns the stored row either way.
    pub async fn ensure(&self, id: &str) -> DbErrorResult<UserRecord> {
        let created_at = Utc::now().timestamp();

        sqlx::query(
            "INSERT INTO user_records (id, auth_status, created_at)
             VALUES (?, ?, ?)
             ON CONFLICT(id) DO NOTHING",
        )
        .bind(id)
        .bind(AuthStatus::Unverified.as_str())
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        self.find_by_id(id).await?.ok_or_else(|| DbError::CorruptRow {
            message: format!("user_records.{id} missing right after ensure"),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Writes a validated identity submission and moves the record to
    /// `Pending Review`. The caller validates before calling; the store
    /// never holds an ID number that failed validation.
    pub async fn submit_identity(
        &self,
        id: &str,
        real_name: &str,
        id_number: &str,
    ) -> DbErrorResult<()> {
        sqlx::query(
            "UPDATE user_records
             SET real_name = ?, id_number = ?, auth_status = ?
             WHERE id = ?",
        )
        .bind(real_name)
        .bind(id_number)
        .bind(AuthStatus::PendingReview.as_str())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn set_status(&self, id: &str, status: AuthStatus) -> DbErrorResult<()> {
        sqlx::query("UPDATE user_records SET auth_status = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn bind_uid(&self, id: &str, slot: UidSlot, uid: &str) -> DbErrorResult<()> {
        let query = match slot {
            UidSlot::Primary => "UPDATE user_records SET uid1 = ? WHERE id = ?",
            UidSlot::Secondary => "UPDATE user_records SET uid2 = ? WHERE id = ?",
            UidSlot::Tertiary => "UPDATE user_records SET uid3 = ? WHERE id = ?",
        };

        sqlx::query(query)
            .bind(uid)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Atomic invite: claims the target's inviter slot and consumes one
    /// unit of the inviter's quota in a single transaction. The increment
    /// is quota-conditional, so of two concurrent invites at the boundary
    /// exactly one commits.
    pub async fn invite(
        &self,
        inviter_id: &str,
        target_id: &str,
        quota: InviteQuota,
    ) -> DbErrorResult<InviteOutcome> {
        let mut tx = self.pool.begin().await?;

        let created_at = Utc::now().timestamp();
        sqlx::query(
            "INSERT INTO user_records (id, auth_status, created_at)
             VALUES (?, ?, ?)
             ON CONFLICT(id) DO NOTHING",
        )
        .bind(target_id)
        .bind(AuthStatus::Unverified.as_str())
        .bind(created_at)
        .execute(&mut *tx)
        .await?;

        let claimed = sqlx::query(
            "UPDATE user_records SET inviter_id = ?
             WHERE id = ? AND inviter_id IS NULL",
        )
        .bind(inviter_id)
        .bind(target_id)
        .execute(&mut *tx)
        .await?;

        if claimed.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(InviteOutcome::AlreadyInvited);
        }

        let consumed = match quota {
            InviteQuota::Unlimited => {
                sqlx::query(
                    "UPDATE user_records SET invite_count = invite_count + 1
                     WHERE id = ?",
                )
                .bind(inviter_id)
                .execute(&mut *tx)
                .await?
            }
            InviteQuota::Limited(limit) => {
                sqlx::query(
                    "UPDATE user_records SET invite_count = invite_count + 1
                     WHERE id = ? AND invite_count < ?",
                )
                .bind(inviter_id)
                .bind(i64::from(limit))
                .execute(&mut *tx)
                .await?
            }
        };

        if consumed.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(InviteOutcome::QuotaExhausted);
        }

        tx.commit().await?;
        Ok(InviteOutcome::Invited)
    }

    /// Owner bootstrap: creates or promotes the record straight to `Admin`.
    /// Safe to repeat.
    pub async fn upsert_admin(&self, id: &str) -> DbErrorResult<UserRecord> {
        let created_at = Utc::now().timestamp();

        sqlx::query(
            "INSERT INTO user_records (id, auth_status, created_at)
             VALUES (?, ?, ?)
             ON CONFLICT(id) DO UPDATE SET auth_status = excluded.auth_status",
        )
        .bind(id)
        .bind(AuthStatus::Admin.as_str())
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        self.find_by_id(id).await?.ok_or_else(|| DbError::CorruptRow {
            message: format!("user_records.{id} missing right after upsert"),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Not reachable from any command; exists for operator tooling. The
    /// schema nulls dependents' `inviter_id` rather than cascading the
    /// delete.
    pub async fn delete(&self, id: &str) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM user_records WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_record(row: &SqliteRow) -> DbErrorResult<UserRecord> {
    let status: String = row.try_get("auth_status")?;
    let auth_status = AuthStatus::from_str(&status).map_err(|e| DbError::CorruptRow {
        message: format!("user_records.auth_status: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let created_at_secs: i64 = row.try_get("created_at")?;
    let created_at =
        DateTime::<Utc>::from_timestamp(created_at_secs, 0).ok_or_else(|| DbError::CorruptRow {
            message: "user_records.created_at out of range".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(UserRecord {
        id: row.try_get("id")?,
        real_name: row.try_get("real_name")?,
        id_number: row.try_get("id_number")?,
        uid1: row.try_get("uid1")?,
        uid2: row.try_get("uid2")?,
        uid3: row.try_get("uid3")?,
        auth_status,
        inviter_id: row.try_get("inviter_id")?,
        invite_count: row.try_get("invite_count")?,
        created_at,
    })
}
