pub mod models;
pub mod repositories;
pub mod schema;

pub mod mock;

use std::time::Duration;

use eyre::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

pub type DbPool = Pool<Postgres>;

/// Upper bound on concurrent store connections; acquisition queues beyond it.
const MAX_CONNECTIONS: u32 = 5;
/// How long an acquisition may queue before failing instead of hanging.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);
/// Idle connections are reclaimed after this long.
const IDLE_TIMEOUT: Duration = Duration::from_secs(600);

pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .idle_timeout(IDLE_TIMEOUT)
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// True if the report wraps the store's uniqueness-constraint signal.
///
/// Used by the registration handler to translate a duplicate identity into
/// a user-facing conflict instead of a generic failure.
pub fn is_unique_violation(err: &eyre::Report) -> bool {
    err.downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .is_some_and(|db_err| db_err.is_unique_violation())
}
