//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{AuthService, UrlService};
use crate::infrastructure::persistence::SqliteUrlRepository;
use crate::utils::alias_generator::RandomAliasGenerator;

/// URL workflows over the SQLite store with the OS-seeded alias generator.
pub type SqliteUrlService = UrlService<SqliteUrlRepository, RandomAliasGenerator>;

#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<SqliteUrlService>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    pub fn new(url_service: Arc<SqliteUrlService>, auth_service: Arc<AuthService>) -> Self {
        Self {
            url_service,
            auth_service,
        }
    }
}
