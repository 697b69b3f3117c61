//! Save, resolve and delete workflows over the URL store.

use std::sync::Arc;

use validator::Validate;

use crate::domain::entities::{NewUrl, SavedUrl, UrlRecord};
use crate::domain::repositories::{StoreError, UrlRepository};
use crate::error::AppError;
use crate::utils::alias_generator::AliasGenerator;

/// Length of generated aliases.
pub const ALIAS_LENGTH: usize = 5;

/// Number of candidates tried before alias generation gives up.
pub const MAX_ALIAS_ATTEMPTS: usize = 5;

/// Service implementing the alias lifecycle.
///
/// Depends only on the [`UrlRepository`] capability and an injected
/// [`AliasGenerator`]. Holds no mutable state of its own, so a single
/// instance is shared by all requests.
pub struct UrlService<R: UrlRepository, G: AliasGenerator> {
    repository: Arc<R>,
    generator: Arc<G>,
}

impl<R: UrlRepository, G: AliasGenerator> UrlService<R, G> {
    /// Creates a new URL service.
    pub fn new(repository: Arc<R>, generator: Arc<G>) -> Self {
        Self {
            repository,
            generator,
        }
    }

    /// Validates and stores a URL under a caller-supplied or generated alias.
    ///
    /// A non-empty alias is used as-is; a taken alias surfaces as a conflict
    /// from the store. An empty alias is replaced by a fresh
    /// [`ALIAS_LENGTH`]-character candidate not currently in the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with field-scoped messages if the
    /// URL or alias is invalid.
    ///
    /// Returns [`AppError::Conflict`] if the alias already exists.
    ///
    /// Returns [`AppError::Internal`] on store failures or when no free alias
    /// is found within [`MAX_ALIAS_ATTEMPTS`] candidates.
    pub async fn save_url(&self, new_url: NewUrl) -> Result<SavedUrl, AppError> {
        new_url.validate()?;

        let alias = if new_url.wants_generated_alias() {
            self.generate_unique_alias().await?
        } else {
            new_url.alias
        };

        match self.repository.save(&new_url.url, &alias).await {
            Ok(id) => {
                tracing::info!(alias = %alias, id, "url saved");
                Ok(SavedUrl { id, alias })
            }
            Err(StoreError::AlreadyExists(_)) => {
                tracing::info!(alias = %alias, "alias already exists");
                Err(AppError::conflict("alias already exists"))
            }
            Err(e) => {
                tracing::error!(operation = "save", alias = %alias, error = %e, "failed to add url");
                Err(AppError::internal("failed to add url"))
            }
        }
    }

    /// Returns the target URL stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty alias (no store call is made).
    /// Returns [`AppError::NotFound`] if the alias is unknown.
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn resolve_url(&self, alias: &str) -> Result<String, AppError> {
        if alias.is_empty() {
            tracing::info!("alias is empty");
            return Err(AppError::bad_request("invalid request"));
        }

        match self.repository.resolve(alias).await {
            Ok(url) => {
                tracing::info!(alias, url = %url, "url resolved");
                Ok(url)
            }
            Err(StoreError::NotFound(_)) => {
                tracing::info!(alias, "url not found");
                Err(AppError::not_found("not found"))
            }
            Err(e) => {
                tracing::error!(operation = "resolve", alias, error = %e, "failed to get url");
                Err(AppError::internal("internal error"))
            }
        }
    }

    /// Removes the record stored under `alias`.
    ///
    /// Deleting an unknown alias succeeds; whether a record was actually
    /// removed is only logged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty alias.
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn delete_url(&self, alias: &str) -> Result<(), AppError> {
        if alias.is_empty() {
            tracing::info!("alias is empty");
            return Err(AppError::bad_request("invalid request"));
        }

        match self.repository.delete(alias).await {
            Ok(true) => {
                tracing::info!(alias, "url deleted");
                Ok(())
            }
            Ok(false) => {
                tracing::info!(alias, "nothing to delete");
                Ok(())
            }
            Err(e) => {
                tracing::error!(operation = "delete", alias, error = %e, "failed to delete url");
                Err(AppError::internal("internal error"))
            }
        }
    }

    /// Lists the most recent records, newest first.
    ///
    /// `limit` must be at least 1; SQLite reads a negative `LIMIT` as unbounded.
    pub async fn list_urls(&self, limit: i64) -> Result<Vec<UrlRecord>, AppError> {
        if limit < 1 {
            return Err(AppError::bad_request("limit must be at least 1"));
        }

        self.repository.list_recent(limit).await.map_err(|e| {
            tracing::error!(operation = "list", error = %e, "failed to list urls");
            AppError::internal("internal error")
        })
    }

    /// Checks that the store is reachable.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.repository.health_check().await.map_err(|e| {
            tracing::warn!(operation = "health_check", error = %e, "store unavailable");
            AppError::internal("store unavailable")
        })
    }

    /// Picks a generated alias that is not in the store yet.
    ///
    /// The probe is optimistic: a concurrent save can still take the alias
    /// before ours lands, which the store then reports as a conflict.
    async fn generate_unique_alias(&self) -> Result<String, AppError> {
        for attempt in 1..=MAX_ALIAS_ATTEMPTS {
            let candidate = self.generator.generate(ALIAS_LENGTH);

            match self.repository.resolve(&candidate).await {
                Err(StoreError::NotFound(_)) => return Ok(candidate),
                Ok(_) => {
                    tracing::debug!(alias = %candidate, attempt, "generated alias collides");
                }
                Err(e) => {
                    tracing::error!(
                        operation = "resolve",
                        alias = %candidate,
                        error = %e,
                        "failed to probe generated alias"
                    );
                    return Err(AppError::internal("failed to add url"));
                }
            }
        }

        tracing::error!(
            attempts = MAX_ALIAS_ATTEMPTS,
            "no free alias after all attempts"
        );
        Err(AppError::internal("failed to generate alias"))
    }
}
