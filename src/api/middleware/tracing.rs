//! HTTP request/response tracing middleware.

use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::request_id::{
    MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer,
};
use tower_http::trace::{DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{Level, Span};

/// Header carrying the per-request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Span factory that records the request id next to method and URI.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestIdSpan;

impl<B> MakeSpan<B> for RequestIdSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let request_id = request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("-");

        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            version = ?request.version(),
            request_id,
        )
    }
}

/// Creates a tracing middleware for HTTP requests.
///
/// **On Request:** opens an `INFO` span with method, URI, HTTP version and
/// request id.
///
/// **On Response:** logs status code and latency in milliseconds.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST uri=/url version=HTTP/1.1 request_id=6f1c...}: finished processing request latency=3 ms status=200
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, RequestIdSpan> {
    TraceLayer::new_for_http()
        .make_span_with(RequestIdSpan)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}

/// Assigns a UUID `x-request-id` to requests that lack one.
///
/// Must wrap [`layer`] so the span can see the id.
pub fn set_request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::x_request_id(MakeRequestUuid)
}

/// Copies `x-request-id` from the request onto the response.
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::x_request_id()
}
