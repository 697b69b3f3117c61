//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization. Input validation happens on the
//! domain type they convert into.

pub mod health;
pub mod response;
pub mod save_url;
