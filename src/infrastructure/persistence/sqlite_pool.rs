//! SQLite connection pool setup and schema migrations.

use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

/// Connection settings for the SQLite pool.
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub database_url: String,
    pub max_connections: u32,
    pub busy_timeout: Duration,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub connect_retries: usize,
}

/// Opens the pool, creating the database file and its directory if missing.
///
/// Uses WAL journaling and a busy timeout so concurrent writers wait for the
/// lock instead of failing with `database is locked`. Failed connection
/// attempts are retried with jittered exponential backoff.
///
/// # Errors
///
/// Returns the last connection error once all retries are spent.
pub async fn connect(settings: &PoolSettings) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&settings.database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(settings.busy_timeout);

    if let Some(parent) = options.get_filename().parent() {
        std::fs::create_dir_all(parent)?;
    }

    let strategy = ExponentialBackoff::from_millis(10)
        .factor(10)
        .max_delay(Duration::from_secs(5))
        .map(jitter)
        .take(settings.connect_retries);

    let pool_options = SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .idle_timeout(settings.idle_timeout);

    Retry::spawn(strategy, || {
        let options = options.clone();
        let pool_options = pool_options.clone();
        async move {
            pool_options
                .connect_with(options)
                .await
                .inspect_err(|e| tracing::warn!(error = %e, "database connection attempt failed"))
        }
    })
    .await
}

/// Applies pending migrations from `migrations/`.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
