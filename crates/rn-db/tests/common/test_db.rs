use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Seeds a record with a given status and consumed invite count, bypassing
/// the repository so tests control the starting state exactly.
pub async fn seed_record(pool: &SqlitePool, id: &str, status: &str, invite_count: i64) {
    sqlx::query(
        "INSERT INTO user_records (id, auth_status, invite_count, created_at)
         VALUES (?, ?, ?, strftime('%s', 'now'))",
    )
    .bind(id)
    .bind(status)
    .bind(invite_count)
    .execute(pool)
    .await
    .expect("Failed to seed record");
}
