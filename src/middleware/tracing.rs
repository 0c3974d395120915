// ABOUTME: Request tracing span construction for the HTTP router
// ABOUTME: Correlates every request with a request ID taken from the header or generated

use http::Request;
use tracing::Span;
use uuid::Uuid;

/// Request ID from `x-request-id`, or a fresh one
#[must_use]
pub fn request_id<B>(request: &Request<B>) -> String {
    request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map_or_else(|| format!("req_{}", Uuid::new_v4().simple()), str::to_owned)
}

/// Create a tracing span for an HTTP request
pub fn create_request_span<B>(request: &Request<B>) -> Span {
    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id(request),
        status_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    )
}
