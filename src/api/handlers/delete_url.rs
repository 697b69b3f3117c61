//! Handler for removing aliases.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::response::StatusResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Deletes an alias.
///
/// # Endpoint
///
/// `DELETE /url/{alias}` (Basic auth)
///
/// Deleting an unknown alias also returns `{"status": "OK"}`.
pub async fn delete_url_handler(
    State(state): State<AppState>,
    Path(alias): Path<String>,
) -> Result<Json<StatusResponse>, AppError> {
    state.url_service.delete_url(&alias).await?;

    Ok(Json(StatusResponse::ok()))
}
