//! HTTP middleware for axum.
//!
//! [`apply`] wraps a router in the full production stack: request ids,
//! tracing spans, CORS, request timeout and gzip compression. Requests
//! without an `x-request-id` get a random UUID v4.

use axum::body::Body;
use axum::http::{HeaderValue, Method, Request};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info_span, warn, Span};

use crate::config::ServerConfig;

/// Header carrying the request id in both directions.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Wraps `router` in the middleware stack configured by `config`.
pub fn apply(router: Router, config: &ServerConfig) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http().make_span_with(request_span))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(cors_layer(config))
            .layer(TimeoutLayer::new(config.request_timeout()))
            .layer(CompressionLayer::new()),
    )
}

fn request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");

    info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

/// Permissive when no origins are configured.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::get;
    use tower::ServiceExt;

    fn config(cors_origins: Option<&str>) -> ServerConfig {
        ServerConfig {
            cors_origins: cors_origins.map(str::to_string),
            ..ServerConfig::default()
        }
    }

    fn app(config: &ServerConfig) -> Router {
        apply(Router::new().route("/ping", get(|| async { "pong" })), config)
    }

    async fn generated_request_id(app: Router) -> String {
        let response = app
            .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        response.headers()[REQUEST_ID_HEADER]
            .to_str()
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn generated_request_id_is_a_uuid() {
        let id = generated_request_id(app(&config(None))).await;

        let groups: Vec<usize> = id.split('-').map(str::len).collect();
        assert_eq!(groups, vec![8, 4, 4, 4, 12]);
        assert!(id.chars().all(|c| c == '-' || c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn separate_routers_do_not_repeat_ids() {
        let first = generated_request_id(app(&config(None))).await;
        let second = generated_request_id(app(&config(None))).await;

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn incoming_request_id_is_kept() {
        let request = Request::builder()
            .uri("/ping")
            .header(REQUEST_ID_HEADER, "abc-123")
            .body(Body::empty())
            .unwrap();
        let response = app(&config(None)).oneshot(request).await.unwrap();

        assert_eq!(response.headers()[REQUEST_ID_HEADER], "abc-123");
    }

    #[tokio::test]
    async fn configured_origin_is_allowed() {
        let request = Request::builder()
            .uri("/ping")
            .header("origin", "http://localhost:5173")
            .body(Body::empty())
            .unwrap();
        let response = app(&config(Some("http://localhost:5173, http://example.com")))
            .oneshot(request)
            .await
            .unwrap();

        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "http://localhost:5173"
        );
    }
}
