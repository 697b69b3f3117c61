//! HTTP middleware for request processing and protection.
//!
//! Provides authentication, observability and the legacy error-status mode.

pub mod auth;
pub mod error_status;
pub mod tracing;
