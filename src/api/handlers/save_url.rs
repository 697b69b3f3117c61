//! Handler for creating aliases.

use axum::{Json, body::Bytes, extract::State};

use crate::api::dto::save_url::{SaveUrlRequest, SaveUrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Stores a URL under a caller-supplied or generated alias.
///
/// # Endpoint
///
/// `POST /url` (Basic auth)
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/very/long/path", "alias": "docs" }
/// ```
///
/// `alias` is optional; when omitted or empty a 5-character alias is generated.
///
/// # Response
///
/// ```json
/// { "status": "OK", "alias": "docs" }
/// ```
///
/// # Errors
///
/// - `400` - empty body, undecodable JSON, invalid URL or reserved alias
/// - `409` - alias already exists
/// - `500` - storage failure
///
/// The body is read as raw bytes so an empty body and malformed JSON get their
/// own messages instead of axum's generic JSON rejection.
pub async fn save_url_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SaveUrlResponse>, AppError> {
    if body.is_empty() {
        tracing::info!("request body is empty");
        return Err(AppError::bad_request("empty request"));
    }

    let request: SaveUrlRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::info!(error = %e, "failed to decode request body");
        AppError::bad_request("failed to decode request")
    })?;

    let saved = state.url_service.save_url(request.into()).await?;

    Ok(Json(SaveUrlResponse::new(saved.alias)))
}
