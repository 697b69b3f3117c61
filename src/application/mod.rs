//! Application layer services implementing business logic.
//!
//! This layer runs the save, resolve and delete workflows by coordinating the
//! URL store, the alias generator and validation. Services consume repository
//! traits and provide a narrow API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::url_service::UrlService`] - Alias lifecycle workflows
//! - [`services::auth_service::AuthService`] - HTTP Basic credential checks

pub mod services;
