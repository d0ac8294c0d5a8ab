//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. Pooling policy is
//! entirely the driver's; nothing here retries or times out beyond the
//! driver defaults.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Connection, PgPool};

pub mod users;

pub use users::{User, UserRepo};

/// Default maximum connections for the pool.
/// Kept low for single-user tooling.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

/// Open a connection pool and ping it once.
///
/// The ping confirms the connection is usable before any statement runs;
/// a failed connect or ping surfaces here, before any query is attempted.
pub async fn connect(options: PgConnectOptions) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .connect_with(options)
        .await?;

    pool.acquire().await?.ping().await?;

    Ok(pool)
}
