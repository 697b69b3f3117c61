//! HTTP request handlers for API endpoints.

pub mod delete_url;
pub mod health;
pub mod redirect;
pub mod save_url;

pub use delete_url::delete_url_handler;
pub use health::health_handler;
pub use redirect::{missing_alias_handler, redirect_handler};
pub use save_url::save_url_handler;
