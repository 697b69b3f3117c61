//! Utility functions for alias generation, input validation and error mapping.
//!
//! - [`alias_generator`] - Random alias generation from an injected CSPRNG
//! - [`url_validator`] - Field validators for URLs and aliases
//! - [`db_error`] - Database driver error classification

pub mod alias_generator;
pub mod db_error;
pub mod url_validator;
