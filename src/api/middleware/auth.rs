//! HTTP Basic authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBasic;

use crate::{error::AppError, state::AppState};

/// Authenticates requests using Basic credentials from the Authorization header.
///
/// # Header Format
///
/// ```text
/// Authorization: Basic base64(user:password)
/// ```
///
/// # Errors
///
/// Returns `401 Unauthorized` with `WWW-Authenticate: Basic realm="tinyalias"`
/// if the header is missing, malformed or carries wrong credentials.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::post, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/url", post(save_url_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBasic((user, password)) = AuthBasic::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            tracing::info!("missing or malformed basic credentials");
            AppError::unauthorized("unauthorized")
        })?;

    st.auth_service.authenticate(&user, password.as_deref())?;

    let req = Request::from_parts(parts, body);

    Ok(next.run(req).await)
}
