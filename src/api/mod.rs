//! HTTP API layer for request/response handling.
//!
//! This layer translates HTTP requests into workflow calls and formats
//! responses as the `{"status": ..., "error": ...}` JSON envelope.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Authentication, tracing and legacy status middleware
//! - [`routes`] - Protected route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
