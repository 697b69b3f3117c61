//! Repository trait definitions for the domain layer.
//!
//! The URL store is expressed as the [`UrlRepository`] capability so the
//! workflows in [`crate::application::services`] depend only on save, resolve
//! and delete semantics, never on a concrete engine.
//!
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod url_repository;

pub use url_repository::{StoreError, UrlRepository};

#[cfg(test)]
pub use url_repository::MockUrlRepository;
