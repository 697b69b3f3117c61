//! Repository trait for URL record persistence.

use async_trait::async_trait;

use crate::domain::entities::UrlRecord;

/// Failures reported by a [`UrlRepository`].
///
/// `AlreadyExists` and `NotFound` are distinct from backend failures so the
/// workflows can retry alias selection or report a conflict.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("alias '{0}' already exists")]
    AlreadyExists(String),

    #[error("alias '{0}' not found")]
    NotFound(String),

    #[error("store operation '{0}' timed out")]
    Timeout(&'static str),

    #[error("store backend error: {0}")]
    Backend(#[from] sqlx::Error),
}

/// Repository interface for URL records keyed by a unique alias.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new record and returns its store-assigned id.
    ///
    /// Uniqueness is enforced by the backing table, so of two concurrent saves
    /// with the same alias at most one succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AlreadyExists`] if the alias is taken.
    /// Returns [`StoreError::Backend`] or [`StoreError::Timeout`] on storage failures.
    async fn save(&self, url: &str, alias: &str) -> Result<i64, StoreError>;

    /// Looks up the target URL for an alias.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record has this alias.
    /// Returns [`StoreError::Backend`] or [`StoreError::Timeout`] on storage failures.
    async fn resolve(&self, alias: &str) -> Result<String, StoreError>;

    /// Removes the record with this alias.
    ///
    /// Deleting an absent alias is not an error. Returns `Ok(true)` if a record
    /// was removed and `Ok(false)` if there was nothing to remove.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] or [`StoreError::Timeout`] on storage failures.
    async fn delete(&self, alias: &str) -> Result<bool, StoreError>;

    /// Lists the most recently created records, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] or [`StoreError::Timeout`] on storage failures.
    async fn list_recent(&self, limit: i64) -> Result<Vec<UrlRecord>, StoreError>;

    /// Checks that the backing store is reachable.
    async fn health_check(&self) -> Result<(), StoreError>;
}
