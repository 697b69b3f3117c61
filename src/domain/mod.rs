//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Repository traits define contracts implemented by the infrastructure layer
//! - Workflows are implemented in services (see [`crate::application::services`])

pub mod entities;
pub mod repositories;
