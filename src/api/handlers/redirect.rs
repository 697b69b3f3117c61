//! Handler for alias redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its stored URL.
///
/// # Endpoint
///
/// `GET /{alias}` (public)
///
/// # Response Codes
///
/// - **302 Found**: `Location` carries the stored URL
/// - **404 Not Found**: unknown alias, JSON error body
/// - **500 Internal Server Error**: storage failure
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(alias): Path<String>,
) -> Result<Response, AppError> {
    let url = state.url_service.resolve_url(&alias).await?;

    let location = location_header(&url).ok_or_else(|| {
        tracing::error!(alias = %alias, url = %url, "stored url is not a valid header value");
        AppError::internal("internal error")
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Handles `GET /` where no alias is present.
pub async fn missing_alias_handler() -> AppError {
    tracing::info!("alias is empty");
    AppError::bad_request("invalid request")
}

/// Builds a `Location` value, percent-encoding non-ASCII URLs.
fn location_header(url: &str) -> Option<HeaderValue> {
    if url.is_ascii() {
        return HeaderValue::from_str(url).ok();
    }

    Url::parse(url)
        .ok()
        .and_then(|parsed| HeaderValue::from_str(parsed.as_str()).ok())
}
