use axum::{Router, http};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use uuid::Uuid;

use crate::adapters::{self, http::app_state::AppState};

pub fn create_app(app_state: AppState) -> Router {
    let cors = cors_layer(app_state.config.cors_origin.clone());

    Router::new()
        .nest("/api", adapters::http::routes::router())
        .fallback(adapters::http::routes::not_found)
        .with_state(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http().make_span_with(|request: &http::Request<_>| {
                        let request_id = Uuid::new_v4();
                        tracing::info_span!(
                            "http-request",
                            method = %request.method(),
                            uri = %request.uri(),
                            version = ?request.version(),
                            request_id = %request_id
                        )
                    }),
                )
                .layer(SetResponseHeaderLayer::if_not_present(
                    http::header::X_CONTENT_TYPE_OPTIONS,
                    http::HeaderValue::from_static("nosniff"),
                ))
                .layer(cors),
        )
}

/// Credentialed CORS that echoes the caller's origin, method and headers.
/// A configured origin replaces the echoed one.
fn cors_layer(origin: Option<http::HeaderValue>) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);
    match origin {
        Some(origin) => cors.allow_origin(origin),
        None => cors.allow_origin(AllowOrigin::mirror_request()),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use axum_test::TestServer;

    use super::*;
    use crate::test_utils::TestAppStateBuilder;

    fn header<'a>(response: &'a axum_test::TestResponse, name: &str) -> Option<&'a str> {
        response.headers().get(name).and_then(|v| v.to_str().ok())
    }

    #[tokio::test]
    async fn preflight_echoes_origin_method_and_headers_with_credentials() {
        let server = TestServer::new(create_app(TestAppStateBuilder::new().build())).unwrap();

        let response = server
            .method(Method::OPTIONS, "/api/waitlist")
            .add_header("Origin", "https://app.example")
            .add_header("Access-Control-Request-Method", "POST")
            .add_header("Access-Control-Request-Headers", "content-type,x-custom")
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(
            header(&response, "access-control-allow-origin"),
            Some("https://app.example")
        );
        assert_eq!(header(&response, "access-control-allow-methods"), Some("POST"));
        assert_eq!(
            header(&response, "access-control-allow-headers"),
            Some("content-type,x-custom")
        );
        assert_eq!(
            header(&response, "access-control-allow-credentials"),
            Some("true")
        );
    }

    #[tokio::test]
    async fn simple_request_echoes_origin_with_credentials() {
        let server = TestServer::new(create_app(TestAppStateBuilder::new().build())).unwrap();

        let response = server
            .get("/api/health")
            .add_header("Origin", "https://somewhere.example")
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(
            header(&response, "access-control-allow-origin"),
            Some("https://somewhere.example")
        );
        assert_eq!(
            header(&response, "access-control-allow-credentials"),
            Some("true")
        );
    }

    #[tokio::test]
    async fn configured_origin_restricts_cors() {
        let app_state = TestAppStateBuilder::new()
            .with_cors_origin("https://ecoai.example")
            .build();
        let server = TestServer::new(create_app(app_state)).unwrap();

        let response = server
            .method(Method::OPTIONS, "/api/health")
            .add_header("Origin", "https://ecoai.example")
            .add_header("Access-Control-Request-Method", "GET")
            .await;

        assert_eq!(
            header(&response, "access-control-allow-origin"),
            Some("https://ecoai.example")
        );
    }

    #[tokio::test]
    async fn responses_carry_nosniff_header() {
        let server = TestServer::new(create_app(TestAppStateBuilder::new().build())).unwrap();

        let response = server.get("/api/stats").await;

        assert_eq!(header(&response, "x-content-type-options"), Some("nosniff"));
    }

    #[tokio::test]
    async fn unknown_path_returns_json_404() {
        let server = TestServer::new(create_app(TestAppStateBuilder::new().build())).unwrap();

        let response = server.get("/api/unknown").await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = response.json();
        assert_eq!(body, serde_json::json!({ "detail": "Not Found" }));
    }
}
