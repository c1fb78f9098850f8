use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::config::Config;
use crate::message::repository::{InMemoryMessageRepository, PostgresMessageRepository};
use crate::room::repository::{InMemoryRoomRepository, PostgresRoomRepository};
use crate::shared::AppState;

#[derive(Debug, Error)]
pub enum StorageInitError {
    #[error("failed to connect to database: {0}")]
    Connect(#[from] sqlx::Error),

    #[error("failed to run migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Builds the application state for the configured storage backend
///
/// With a database URL the schema is migrated before any request is served.
pub async fn build_state(config: &Config) -> Result<AppState, StorageInitError> {
    match &config.database_url {
        Some(url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.database_max_connections)
                .connect(url)
                .await?;
            sqlx::migrate!("./migrations").run(&pool).await?;
            info!("Using PostgreSQL storage");

            Ok(AppState::new(
                Arc::new(PostgresRoomRepository::new(pool.clone())),
                Arc::new(PostgresMessageRepository::new(pool)),
            ))
        }
        None => {
            info!("DATABASE_URL not set, using in-memory storage");
            Ok(in_memory_state())
        }
    }
}

pub fn in_memory_state() -> AppState {
    AppState::new(
        Arc::new(InMemoryRoomRepository::new()),
        Arc::new(InMemoryMessageRepository::new()),
    )
}

/// Pool for tests that need a real PostgreSQL, migrated like production
///
/// Returns `None` when `DATABASE_URL` is unset so `--ignored` runs without a
/// database skip instead of failing.
#[cfg(test)]
pub(crate) async fn test_pool() -> Option<sqlx::PgPool> {
    let url = std::env::var("DATABASE_URL").ok()?;
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("DATABASE_URL should point at a reachable database");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations should apply");
    Some(pool)
}
