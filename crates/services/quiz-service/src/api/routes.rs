//! Route configuration.

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::openapi::ApiDoc;
use super::question_handler::question_routes;
use super::quiz_handler::quiz_routes;
use super::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/v1/quizzes", quiz_routes())
        .nest("/api/v1/questions", question_routes())
        // CORS is wide open for development
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Service health endpoint
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "UP",
        "service": "quiz-service",
        "timestamp": chrono::Utc::now(),
    }))
}
