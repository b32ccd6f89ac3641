//! Database connection management

use std::{str::FromStr, time::Duration};

use sqlx::{
    Sqlite, SqlitePool, Transaction, raw_sql,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use tracing::debug;

/// Idempotent schema for categories, products and their join table.
pub const SCHEMA_SQL: &str = include_str!("sql/schema.sql");

/// Connection pool tuning.
#[derive(Debug, Clone, Copy)]
pub struct PoolSettings {
    /// Upper bound on pooled connections.
    pub max_connections: u32,

    /// How long a connection waits on a locked database before failing.
    pub busy_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 5,
            busy_timeout: Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Db {
    pool: SqlitePool,
}

impl Db {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Begin a transaction.
    ///
    /// # Errors
    ///
    /// Returns an error when no connection can be acquired or `BEGIN` fails.
    pub async fn begin(&self) -> Result<Transaction<'static, Sqlite>, sqlx::Error> {
        self.pool.begin().await
    }

    /// Begin a transaction holding the write lock from the start.
    ///
    /// A deferred transaction that reads before it writes fails with
    /// `SQLITE_BUSY_SNAPSHOT` when another writer commits in between, and the
    /// busy timeout does not retry that. `BEGIN IMMEDIATE` waits on the busy
    /// timeout instead.
    ///
    /// # Errors
    ///
    /// Returns an error when no connection can be acquired or the write lock is
    /// not granted within the busy timeout.
    pub async fn begin_write(&self) -> Result<Transaction<'static, Sqlite>, sqlx::Error> {
        self.pool.begin_with("BEGIN IMMEDIATE").await
    }
}

/// Connect to `SQLite`, creating the database file when missing.
///
/// Pooled connections are never recycled, which keeps `sqlite::memory:`
/// databases alive for the lifetime of the pool.
///
/// # Errors
///
/// Returns an error if the URL is invalid or the connection cannot be established.
pub async fn connect(database_url: &str, settings: PoolSettings) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(settings.busy_timeout);

    SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}

/// Create the schema if it does not exist yet.
///
/// # Errors
///
/// Returns an error if any schema statement fails.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    raw_sql(SCHEMA_SQL).execute(pool).await?;

    debug!("database schema ensured");

    Ok(())
}
