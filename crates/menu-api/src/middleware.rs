// ============================================================================
// Menu API - HTTP Middleware
// File: crates/menu-api/src/middleware.rs
// ============================================================================

use axum::{
    extract::DefaultBodyLimit,
    http::{header, header::InvalidHeaderValue, HeaderValue, Method, StatusCode},
    Router,
};
use menu_shared::config::HttpSettings;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing::info;

/// Wraps the router in the transport layers. The request id layer is
/// outermost so the trace span and the response both carry `x-request-id`.
pub fn apply_http_layers(router: Router, http: &HttpSettings) -> Result<Router, InvalidHeaderValue> {
    Ok(router
        .layer(DefaultBodyLimit::max(http.body_limit_bytes))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            http.request_timeout(),
        ))
        .layer(cors_layer(&http.allowed_origins)?)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid)))
}

fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer, InvalidHeaderValue> {
    if allowed_origins.is_empty() {
        info!("CORS: no origins configured, allowing any origin");
        return Ok(CorsLayer::permissive());
    }

    let origins = allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_malformed_origin() {
        assert!(cors_layer(&["http://ok.example".to_string()]).is_ok());
        assert!(cors_layer(&["bad\norigin".to_string()]).is_err());
        assert!(cors_layer(&[]).is_ok());
    }
}
