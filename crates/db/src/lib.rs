//! PostgreSQL binding for the GameLibrary catalog.
//!
//! Owns the connection pool lifecycle, the embedded migrations, the row
//! models and the repositories that translate catalog operations into SQL.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Errors raised while bringing the database up at startup.
#[derive(Debug, thiserror::Error)]
pub enum DbSetupError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Pool settings shared by [`create_pool`] and lazily connected pools.
///
/// `acquire_timeout` bounds how long a query waits for a connection, so an
/// unreachable server fails the query with `PoolTimedOut`.
pub fn pool_options(max_connections: u32, acquire_timeout: Duration) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
}

/// Create a connection pool from a database URL.
pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<DbPool, sqlx::Error> {
    pool_options(max_connections, acquire_timeout)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the pool can reach the server.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the migrations embedded from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), DbSetupError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::debug!("Catalog schema is up to date");
    Ok(())
}
