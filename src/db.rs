use sqlx::{pool::PoolConnection, postgres::PgPoolOptions, ConnectOptions, PgPool, Postgres};
use thiserror::Error;
use tracing::warn;

use crate::config::AppConfig;

/// Failure of a store operation, as seen by the handlers.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No connection could be acquired from the pool.
    #[error("{0}")]
    Connection(#[source] sqlx::Error),
    #[error("email already registered")]
    DuplicateEmail,
    #[error(transparent)]
    Query(#[from] sqlx::Error),
}

/// Lazily connecting pool: the process starts without the database and
/// connection failures surface per request.
pub fn connect_lazy(config: &AppConfig) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(config.db_acquire_timeout)
        .connect_lazy(&config.database_url)?;
    Ok(pool)
}

/// Connection scoped to one store call; returned to the pool on drop.
pub async fn acquire(db: &PgPool) -> Result<PoolConnection<Postgres>, StoreError> {
    match db.acquire().await {
        Ok(conn) => Ok(conn),
        // The pool reports only its timeout; one direct attempt recovers the connect error.
        Err(sqlx::Error::PoolTimedOut) => {
            let options = db.connect_options();
            let attempt = tokio::time::timeout(
                db.options().get_acquire_timeout(),
                options.connect(),
            )
            .await;
            match attempt {
                Ok(Err(cause)) => {
                    warn!(error = %cause, "pool timed out connecting to database");
                    Err(StoreError::Connection(cause))
                }
                _ => Err(StoreError::Connection(sqlx::Error::PoolTimedOut)),
            }
        }
        Err(e) => Err(StoreError::Connection(e)),
    }
}
