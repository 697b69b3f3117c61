//! SQLite implementation of the URL repository.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::{StoreError, UrlRepository};
use crate::utils::db_error::is_unique_violation_on_alias;

/// SQLite repository for URL records.
///
/// Alias uniqueness comes from the `UNIQUE` constraint on `urls.alias`.
/// Every call is bounded by `query_timeout`.
pub struct SqliteUrlRepository {
    pool: SqlitePool,
    query_timeout: Duration,
}

#[derive(sqlx::FromRow)]
struct UrlRow {
    id: i64,
    alias: String,
    url: String,
    created_at: DateTime<Utc>,
}

impl From<UrlRow> for UrlRecord {
    fn from(row: UrlRow) -> Self {
        UrlRecord::new(row.id, row.alias, row.url, row.created_at)
    }
}

impl SqliteUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: SqlitePool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    /// Runs `query` under the query timeout.
    ///
    /// Expiry only drops the future. The statement keeps running on the
    /// SQLite worker thread, so a timed-out `save` may still commit its row;
    /// callers see `StoreError::Timeout` either way.
    async fn bounded<T, F>(
        &self,
        operation: &'static str,
        query: F,
    ) -> Result<Result<T, sqlx::Error>, StoreError>
    where
        F: Future<Output = Result<T, sqlx::Error>> + Send,
    {
        tokio::time::timeout(self.query_timeout, query)
            .await
            .map_err(|_| StoreError::Timeout(operation))
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn save(&self, url: &str, alias: &str) -> Result<i64, StoreError> {
        let insert = sqlx::query("INSERT INTO urls (alias, url, created_at) VALUES (?, ?, ?)")
            .bind(alias)
            .bind(url)
            .bind(Utc::now())
            .execute(&self.pool);

        match self.bounded("save", insert).await? {
            Ok(result) => Ok(result.last_insert_rowid()),
            Err(e) if is_unique_violation_on_alias(&e) => {
                Err(StoreError::AlreadyExists(alias.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn resolve(&self, alias: &str) -> Result<String, StoreError> {
        let select = sqlx::query_scalar::<_, String>("SELECT url FROM urls WHERE alias = ?")
            .bind(alias)
            .fetch_optional(&self.pool);

        self.bounded("resolve", select)
            .await??
            .ok_or_else(|| StoreError::NotFound(alias.to_string()))
    }

    async fn delete(&self, alias: &str) -> Result<bool, StoreError> {
        let delete = sqlx::query("DELETE FROM urls WHERE alias = ?")
            .bind(alias)
            .execute(&self.pool);

        let result = self.bounded("delete", delete).await??;

        Ok(result.rows_affected() > 0)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<UrlRecord>, StoreError> {
        let select = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, alias, url, created_at
            FROM urls
            ORDER BY created_at DESC, id DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool);

        let rows = self.bounded("list_recent", select).await??;

        Ok(rows.into_iter().map(UrlRecord::from).collect())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        let ping = sqlx::query("SELECT 1").execute(&self.pool);

        self.bounded("health_check", ping).await??;

        Ok(())
    }
}
