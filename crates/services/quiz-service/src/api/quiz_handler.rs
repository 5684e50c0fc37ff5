//! Quiz management endpoints.

use axum::{
    extract::{Path, Query, State},
    http::HeaderValue,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
    Json, Router,
};
use uuid::Uuid;

use common::{Accepted, ApiResponse, AppError, Created, ListResponse, Mapper, PageRequest};

use super::dto::{QuizFilter, QuizRequest, QuizResponse, QuizUpdateRequest};
use super::extractors::ValidatedJson;
use super::state::AppState;

/// Create quiz routes
pub fn quiz_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_quiz).get(list_quizzes))
        .route("/batch", post(create_quizzes).delete(delete_quizzes))
        .route("/all", get(list_all_quizzes))
        .route("/count", get(count_quizzes))
        .route("/exists/:public_id", get(quiz_exists))
        .route(
            "/:public_id",
            get(get_quiz).put(update_quiz).delete(delete_quiz),
        )
        .route("/:public_id/archive", patch(archive_quiz))
}

/// Attach the quiz category as a response header when present.
fn with_category_header(response: ApiResponse<QuizResponse>) -> Response {
    let category = response.data.as_ref().and_then(|d| d.category.clone());
    let mut rendered = response.into_response();
    if let Some(category) = category {
        if let Ok(value) = HeaderValue::from_str(&category) {
            rendered.headers_mut().insert("x-quiz-category", value);
        }
    }
    rendered
}

/// Create a new quiz
#[utoipa::path(
    post,
    path = "/api/v1/quizzes",
    tag = "Quiz Management",
    request_body = QuizRequest,
    responses(
        (status = 201, description = "Quiz created", body = QuizResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Duplicate title")
    )
)]
pub async fn create_quiz(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<QuizRequest>,
) -> Response {
    tracing::info!("Creating new quiz with title: {}", payload.title);
    let response = state.quizzes.create(payload).await;
    Created(with_category_header(response)).into_response()
}

/// Batch create quizzes
#[utoipa::path(
    post,
    path = "/api/v1/quizzes/batch",
    tag = "Quiz Management",
    request_body = Vec<QuizRequest>,
    responses(
        (status = 201, description = "Quizzes created"),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_quizzes(
    State(state): State<AppState>,
    Json(payload): Json<Vec<QuizRequest>>,
) -> Response {
    Created(state.quizzes.create_batch(payload).await).into_response()
}

/// Paginated, optionally filtered quiz list
#[utoipa::path(
    get,
    path = "/api/v1/quizzes",
    tag = "Quiz Management",
    responses((status = 200, description = "One page of quizzes"))
)]
pub async fn list_quizzes(
    State(state): State<AppState>,
    Query(filter): Query<QuizFilter>,
    Query(page): Query<PageRequest>,
) -> ListResponse<QuizResponse> {
    state.quizzes.list(filter, page).await
}

/// All quizzes without pagination
#[utoipa::path(
    get,
    path = "/api/v1/quizzes/all",
    tag = "Quiz Management",
    responses((status = 200, description = "All quizzes"))
)]
pub async fn list_all_quizzes(
    State(state): State<AppState>,
    Query(filter): Query<QuizFilter>,
) -> ListResponse<QuizResponse> {
    state.quizzes.list_all(filter).await
}

/// Get a quiz by its public ID
#[utoipa::path(
    get,
    path = "/api/v1/quizzes/{publicId}",
    tag = "Quiz Management",
    params(("publicId" = Uuid, Path, description = "Public ID of the quiz")),
    responses(
        (status = 200, description = "Quiz found", body = QuizResponse),
        (status = 404, description = "Quiz not found")
    )
)]
pub async fn get_quiz(State(state): State<AppState>, Path(public_id): Path<Uuid>) -> Response {
    with_category_header(state.quizzes.get_by_public_id(public_id).await)
}

/// Update a quiz by its public ID; only set fields are applied
#[utoipa::path(
    put,
    path = "/api/v1/quizzes/{publicId}",
    tag = "Quiz Management",
    params(("publicId" = Uuid, Path, description = "Public ID of the quiz")),
    request_body = QuizUpdateRequest,
    responses(
        (status = 200, description = "Quiz updated", body = QuizResponse),
        (status = 404, description = "Quiz not found")
    )
)]
pub async fn update_quiz(
    State(state): State<AppState>,
    Path(public_id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<QuizUpdateRequest>,
) -> Response {
    with_category_header(state.quizzes.update_by_public_id(public_id, payload).await)
}

/// Archive a quiz (terminal status)
#[utoipa::path(
    patch,
    path = "/api/v1/quizzes/{publicId}/archive",
    tag = "Quiz Management",
    params(("publicId" = Uuid, Path, description = "Public ID of the quiz")),
    responses(
        (status = 202, description = "Quiz archived", body = QuizResponse),
        (status = 404, description = "Quiz not found")
    )
)]
pub async fn archive_quiz(
    State(state): State<AppState>,
    Path(public_id): Path<Uuid>,
) -> Response {
    let response = match state.quizzes.service().archive(public_id).await {
        Ok(quiz) => ApiResponse::success(state.quizzes.mapper().to_response(&quiz)),
        Err(AppError::NotFound) => ApiResponse::not_found(format!("QUIZ {}", public_id)),
        Err(err) => {
            tracing::error!("Failed to archive quiz {}: {}", public_id, err);
            ApiResponse::failure(&err)
        }
    };
    Accepted(with_category_header(response)).into_response()
}

/// Delete a quiz by its public ID
#[utoipa::path(
    delete,
    path = "/api/v1/quizzes/{publicId}",
    tag = "Quiz Management",
    params(("publicId" = Uuid, Path, description = "Public ID of the quiz")),
    responses(
        (status = 200, description = "Quiz deleted"),
        (status = 404, description = "Quiz not found")
    )
)]
pub async fn delete_quiz(
    State(state): State<AppState>,
    Path(public_id): Path<Uuid>,
) -> ApiResponse<()> {
    state.quizzes.delete_by_public_id(public_id).await
}

/// Batch delete quizzes by public IDs
#[utoipa::path(
    delete,
    path = "/api/v1/quizzes/batch",
    tag = "Quiz Management",
    request_body = Vec<Uuid>,
    responses((status = 200, description = "Count of deleted quizzes"))
)]
pub async fn delete_quizzes(
    State(state): State<AppState>,
    Json(public_ids): Json<Vec<Uuid>>,
) -> ApiResponse<u64> {
    state.quizzes.delete_batch_by_public_ids(public_ids).await
}

/// Check if a quiz exists by its public ID
#[utoipa::path(
    get,
    path = "/api/v1/quizzes/exists/{publicId}",
    tag = "Quiz Management",
    params(("publicId" = Uuid, Path, description = "Public ID of the quiz")),
    responses((status = 200, description = "Existence flag"))
)]
pub async fn quiz_exists(
    State(state): State<AppState>,
    Path(public_id): Path<Uuid>,
) -> ApiResponse<bool> {
    state.quizzes.exists_by_public_id(public_id).await
}

/// Count quizzes, optionally restricted by the filter
#[utoipa::path(
    get,
    path = "/api/v1/quizzes/count",
    tag = "Quiz Management",
    responses((status = 200, description = "Quiz count"))
)]
pub async fn count_quizzes(
    State(state): State<AppState>,
    Query(filter): Query<QuizFilter>,
) -> ApiResponse<u64> {
    let filter = if filter.is_empty() { None } else { Some(filter) };
    state.quizzes.count(filter).await
}
