//! Declarative gateway route table.

use axum::{
    routing::{any, get},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers::info_handler::{health, info};
use crate::handlers::proxy::proxy_to_quiz_service;
use crate::state::GatewayState;

/// Create the gateway router.
///
/// `/health` and `/gateway/info` are served locally; quiz API traffic is
/// proxied; everything else falls back to the info page.
pub fn create_router(state: GatewayState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/gateway/info", get(info))
        .route("/api/v1/quizzes", any(proxy_to_quiz_service))
        .route("/api/v1/quizzes/*path", any(proxy_to_quiz_service))
        .fallback(info)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
