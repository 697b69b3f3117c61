//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! the concrete URL store.
//!
//! # Modules
//!
//! - [`persistence`] - SQLite repository implementation and pool setup

pub mod persistence;
