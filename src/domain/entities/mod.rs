//! Core domain entities.
//!
//! The service has a single persisted entity, [`UrlRecord`]. Creation input
//! is carried by [`NewUrl`], which also owns the field-level validation rules
//! applied by the save workflow.

pub mod url_record;

pub use url_record::{NewUrl, SavedUrl, UrlRecord};
