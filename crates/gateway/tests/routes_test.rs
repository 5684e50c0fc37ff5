//! Gateway route table tests.
//!
//! The proxy target is not exercised here; these cover the locally served
//! endpoints and the fallback.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use gateway_lib::config::GatewayConfig;
use gateway_lib::routes::create_router;
use gateway_lib::state::GatewayState;

fn app() -> axum::Router {
    create_router(GatewayState::new(GatewayConfig::default()))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_is_served_locally() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "UP");
    assert_eq!(body["service"], "gateway");
}

#[tokio::test]
async fn info_lists_available_endpoints() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/gateway/info")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["availableEndpoints"]["quiz-api"], "/api/v1/quizzes/**");
}

#[tokio::test]
async fn unmatched_paths_fall_back_to_the_info_page() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/some/unknown/path")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["service"], "Quiz Platform Gateway");
}

#[tokio::test]
async fn proxy_reports_unavailable_when_upstream_is_down() {
    // Point the proxy at a port nothing listens on
    let config = GatewayConfig {
        quiz_service_url: "http://127.0.0.1:59999".to_string(),
        ..GatewayConfig::default()
    };
    let app = create_router(GatewayState::new(config));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/quizzes")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
