//! URL record entity and the input accepted by the save workflow.

use chrono::{DateTime, Utc};
use validator::Validate;

use crate::utils::url_validator::{validate_alias, validate_target_url};

/// A stored mapping from a unique alias to its target URL.
///
/// Records are immutable once created: repointing an alias means deleting
/// the record and saving a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub alias: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(id: i64, alias: String, url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            alias,
            url,
            created_at,
        }
    }
}

/// Input data for the save workflow.
///
/// An empty `alias` asks the workflow to generate one.
#[derive(Debug, Clone, Validate)]
pub struct NewUrl {
    #[validate(custom(function = "validate_target_url"))]
    pub url: String,

    #[validate(custom(function = "validate_alias"))]
    pub alias: String,
}

impl NewUrl {
    pub fn new(url: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alias: alias.into(),
        }
    }

    /// Returns true when no alias was supplied by the caller.
    pub fn wants_generated_alias(&self) -> bool {
        self.alias.is_empty()
    }
}

/// Outcome of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedUrl {
    pub id: i64,
    pub alias: String,
}
