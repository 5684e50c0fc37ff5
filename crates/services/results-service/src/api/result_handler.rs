//! Result endpoints.
//!
//! Unlike the quiz service these handlers return plain JSON bodies rather
//! than the envelope; the results service predates the shared CRUD layer
//! and keeps its original response style.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use common::{AppError, AppResult};

use super::dto::{ResultRequest, ResultResponse};
use super::extractors::ValidatedJson;
use super::state::AppState;

/// Create result routes
pub fn result_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all_results).post(create_result))
        .route("/:id", get(get_result).delete(delete_result))
        .route("/session/:session_id", get(get_result_by_session))
}

/// List all recorded results
#[utoipa::path(
    get,
    path = "/api/v1/results",
    tag = "Results",
    responses((status = 200, description = "All results", body = [ResultResponse]))
)]
pub async fn get_all_results(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ResultResponse>>> {
    Ok(Json(state.results.find_all().await?))
}

/// Get a result by its internal ID
#[utoipa::path(
    get,
    path = "/api/v1/results/{id}",
    tag = "Results",
    params(("id" = i64, Path, description = "Internal ID of the result")),
    responses(
        (status = 200, description = "Result found", body = ResultResponse),
        (status = 404, description = "Result not found")
    )
)]
pub async fn get_result(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ResultResponse>> {
    let result = state
        .results
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(result))
}

/// Get the result recorded for a session
#[utoipa::path(
    get,
    path = "/api/v1/results/session/{sessionId}",
    tag = "Results",
    params(("sessionId" = i64, Path, description = "Session identifier")),
    responses(
        (status = 200, description = "Result found", body = ResultResponse),
        (status = 404, description = "Result not found")
    )
)]
pub async fn get_result_by_session(
    State(state): State<AppState>,
    Path(session_id): Path<i64>,
) -> AppResult<Json<ResultResponse>> {
    let result = state
        .results
        .find_by_session_id(session_id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(result))
}

/// Record a new result
#[utoipa::path(
    post,
    path = "/api/v1/results",
    tag = "Results",
    request_body = ResultRequest,
    responses(
        (status = 201, description = "Result recorded", body = ResultResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_result(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ResultRequest>,
) -> AppResult<(StatusCode, Json<ResultResponse>)> {
    let saved = state.results.save(payload).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// Delete a result
#[utoipa::path(
    delete,
    path = "/api/v1/results/{id}",
    tag = "Results",
    params(("id" = i64, Path, description = "Internal ID of the result")),
    responses((status = 204, description = "Result deleted"))
)]
pub async fn delete_result(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.results.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
