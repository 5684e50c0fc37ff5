//! Gateway informational endpoints.

use axum::response::Json;
use serde_json::json;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Gateway health endpoint
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "UP",
        "service": "gateway",
        "timestamp": chrono::Utc::now(),
        "version": VERSION,
    }))
}

/// Gateway info page; also serves as the fallback for unmatched paths.
pub async fn info() -> Json<serde_json::Value> {
    Json(json!({
        "service": "Quiz Platform Gateway",
        "version": VERSION,
        "description": "API Gateway for Quiz Platform microservices",
        "timestamp": chrono::Utc::now(),
        "availableEndpoints": {
            "health": "/health",
            "gateway-info": "/gateway/info",
            "quiz-api": "/api/v1/quizzes/**",
        },
    }))
}
