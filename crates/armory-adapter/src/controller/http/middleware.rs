//! HTTP middleware for the API server.

use std::time::{Duration, Instant};

use axum::{
    extract::Request,
    http::{header, HeaderMap, HeaderName, HeaderValue, Method},
    middleware::Next,
    response::Response,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

/// Request ID header name.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Caller-supplied request id, or a fresh v4 UUID.
pub fn resolve_request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

/// Runs the request inside a `request` span carrying its id.
///
/// Everything logged while handling the request (extractor rejections,
/// store failures in the loadout use cases, the stats fallback) is
/// recorded under that span, and the id is echoed back in the response.
pub async fn request_context(request: Request, next: Next) -> Response {
    let request_id = resolve_request_id(request.headers());
    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
    );

    let start = Instant::now();
    let mut response = next.run(request).instrument(span.clone()).await;
    let status = response.status();

    span.in_scope(|| {
        let duration_ms = start.elapsed().as_millis() as u64;
        if status.is_server_error() {
            warn!(status = status.as_u16(), duration_ms, "Request failed");
        } else {
            info!(status = status.as_u16(), duration_ms, "Request completed");
        }
    });

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

/// CORS for browser clients. Only the routes' own methods are allowed,
/// and the request id is readable by scripts.
pub fn cors_layer() -> CorsLayer {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, request_id.clone()])
        .expose_headers([request_id])
        .max_age(Duration::from_secs(3600))
}
