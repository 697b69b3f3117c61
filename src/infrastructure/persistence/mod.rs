//! SQLite persistence.
//!
//! Concrete implementation of the domain repository trait using SQLx runtime
//! queries. The schema is owned by the migrations in `migrations/`.
//!
//! # Contents
//!
//! - [`SqliteUrlRepository`] - URL record storage and lookup
//! - [`sqlite_pool`] - Pool setup with connection retry, and migrations

pub mod sqlite_pool;
pub mod sqlite_url_repository;

pub use sqlite_pool::PoolSettings;
pub use sqlite_url_repository::SqliteUrlRepository;
