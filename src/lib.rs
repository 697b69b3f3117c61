//! # tinyalias
//!
//! A small URL shortening service built with Axum and SQLite: save a long URL
//! under a chosen or generated alias, redirect visitors from the alias, delete
//! it when it is no longer needed.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - The URL record entity and the store trait
//! - **Application Layer** ([`application`]) - Save, resolve and delete workflows
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Caller-chosen or randomly generated 5-character aliases
//! - Collision-avoiding alias generation backed by a once-seeded CSPRNG
//! - HTTP Basic authentication for write routes
//! - Proper HTTP error statuses, with an optional legacy mode answering `200`
//! - Request ids and structured logging
//!
//! ## Quick Start
//!
//! ```bash
//! export AUTH_USER="admin"
//! export AUTH_PASSWORD="change-me"
//! export DATABASE_PATH="storage/tinyalias.db"   # optional
//!
//! cargo run
//!
//! curl -u admin:change-me -d '{"url":"https://example.com","alias":"ex"}' localhost:3000/url
//! curl -i localhost:3000/ex
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, UrlService};
    pub use crate::domain::entities::{NewUrl, SavedUrl, UrlRecord};
    pub use crate::domain::repositories::{StoreError, UrlRepository};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
