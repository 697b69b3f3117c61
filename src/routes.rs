//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET    /health`       - Health check (public)
//! - `GET    /{alias}`      - Redirect to the stored URL (public)
//! - `POST   /url`          - Save a URL (Basic auth)
//! - `DELETE /url/{alias}`  - Delete an alias (Basic auth)
//!
//! Static routes win over `/{alias}`, which is why `health` and `url` are
//! reserved aliases.
//!
//! # Middleware
//!
//! - **Request id** - `x-request-id` assigned and echoed on every response
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - `408 Request Timeout` once a request outlives `HTTP_TIMEOUT`
//! - **Authentication** - HTTP Basic on `/url` routes
//! - **Legacy status** - Optional rewrite of error statuses to `200`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, missing_alias_handler, redirect_handler};
use crate::api::middleware::{auth, error_status, tracing};
use crate::state::AppState;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Router, middleware};
use std::time::Duration;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;

/// Builds the router with all routes and middleware, without path normalization.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `legacy_error_status` - when `true`, workflow errors are answered with
///   `200 OK` and the usual error body
/// - `request_timeout` - upper bound for handling one request
pub fn build_router(
    state: AppState,
    legacy_error_status: bool,
    request_timeout: Duration,
) -> Router {
    let api_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let router = Router::new()
        .route("/", get(missing_alias_handler))
        .route("/health", get(health_handler))
        .route("/{alias}", get(redirect_handler))
        .merge(api_router)
        .with_state(state);

    let router = if legacy_error_status {
        router.layer(middleware::map_response(error_status::legacy_status))
    } else {
        router
    };

    router
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(tracing::propagate_request_id_layer())
        .layer(tracing::layer())
        .layer(tracing::set_request_id_layer())
}

/// Constructs the application service, trimming trailing slashes before routing.
pub fn app_router(
    state: AppState,
    legacy_error_status: bool,
    request_timeout: Duration,
) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(
        state,
        legacy_error_status,
        request_timeout,
    ))
}
