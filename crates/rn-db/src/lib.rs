pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::user_record_repository::{InviteOutcome, UserRecordRepository};

/// Embedded schema migrations for the record store.
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}
