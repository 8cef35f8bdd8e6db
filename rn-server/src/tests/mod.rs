
use crate::dispatch::{CommandRequest, Dispatcher};

use rn_core::ChannelKind;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub(crate) const OWNER_ID: &str = "900001";

/// Dispatcher over a fresh in-memory record store with one configured owner.
pub(crate) async fn create_dispatcher() -> Dispatcher {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    rn_db::migrator()
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    Dispatcher::new(pool, vec![OWNER_ID.to_string()])
}

/// Private-channel request with no target and no args; tests adjust fields.
pub(crate) fn request(command: &str, actor_id: &str) -> CommandRequest {
    CommandRequest {
        command: command.to_string(),
        actor_id: actor_id.to_string(),
        target_ref: None,
        args: Vec::new(),
        channel_kind: ChannelKind::Private,
    }
}

pub(crate) fn args(strings: &[&str]) -> Vec<String> {
    strings.iter().map(|s| s.to_string()).collect()
}
