//! Compatibility mode for clients that expect errors as `200 OK`.

use axum::{http::StatusCode, response::Response};

use crate::error::ErrorCode;

/// Rewrites tagged error responses to `200 OK`, keeping the JSON body.
///
/// Only responses produced from [`crate::error::AppError`] carry an
/// [`ErrorCode`]. Authentication failures are not tagged and keep `401`.
///
/// ```rust,ignore
/// router.layer(axum::middleware::map_response(error_status::legacy_status));
/// ```
pub async fn legacy_status(mut response: Response) -> Response {
    if let Some(ErrorCode(code)) = response.extensions().get::<ErrorCode>().copied() {
        tracing::debug!(code, status = %response.status(), "rewriting error status to 200");
        *response.status_mut() = StatusCode::OK;
    }

    response
}
