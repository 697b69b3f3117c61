//! Protected API route configuration.
//!
//! All routes here require HTTP Basic authentication via
//! [`crate::api::middleware::auth`], applied by the caller.

use crate::api::handlers::{delete_url_handler, missing_alias_handler, save_url_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, post},
};

/// URL management routes.
///
/// # Endpoints
///
/// - `POST   /url`          - Save a URL under a given or generated alias
/// - `DELETE /url/{alias}`  - Delete an alias
/// - `DELETE /url`          - Rejected as an invalid request (no alias)
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(save_url_handler).delete(missing_alias_handler))
        .route("/url/{alias}", delete(delete_url_handler))
}
