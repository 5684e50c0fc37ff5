//! Question management endpoints.

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};

use common::{ApiResponse, Created, ListResponse, Mapper, PageRequest};
use domain::QuestionType;

use super::dto::{
    QuestionFilter, QuestionRequest, QuestionResponse, QuestionReviewResponse,
    QuestionUpdateRequest,
};
use super::extractors::ValidatedJson;
use super::state::AppState;

/// Create question routes
pub fn question_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_question).get(list_questions))
        .route("/batch", post(create_questions).delete(delete_questions))
        .route("/count", get(count_questions))
        .route("/exists/:id", get(question_exists))
        .route(
            "/:id",
            get(get_question).put(update_question).delete(delete_question),
        )
        .route("/quiz/:quiz_id", get(questions_by_quiz))
        .route("/quiz/:quiz_id/review", get(questions_by_quiz_for_review))
        .route("/quiz/:quiz_id/points", get(total_points_by_quiz))
        .route("/type/:question_type", get(questions_by_type))
}

/// Create a new question
#[utoipa::path(
    post,
    path = "/api/v1/questions",
    tag = "Question Management",
    request_body = QuestionRequest,
    responses(
        (status = 201, description = "Question created", body = QuestionResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_question(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<QuestionRequest>,
) -> Created<ApiResponse<QuestionResponse>> {
    Created(state.questions.create(payload).await)
}

/// Batch create questions; one invalid member rejects the whole batch
#[utoipa::path(
    post,
    path = "/api/v1/questions/batch",
    tag = "Question Management",
    request_body = Vec<QuestionRequest>,
    responses(
        (status = 201, description = "Questions created"),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_questions(
    State(state): State<AppState>,
    Json(payload): Json<Vec<QuestionRequest>>,
) -> Created<ListResponse<QuestionResponse>> {
    Created(state.questions.create_batch(payload).await)
}

/// Paginated question list
#[utoipa::path(
    get,
    path = "/api/v1/questions",
    tag = "Question Management",
    responses((status = 200, description = "One page of questions"))
)]
pub async fn list_questions(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> ListResponse<QuestionResponse> {
    state.questions.list(QuestionFilter::default(), page).await
}

/// Get a question by its internal ID
#[utoipa::path(
    get,
    path = "/api/v1/questions/{id}",
    tag = "Question Management",
    params(("id" = i64, Path, description = "Internal ID of the question")),
    responses(
        (status = 200, description = "Question found", body = QuestionResponse),
        (status = 404, description = "Question not found")
    )
)]
pub async fn get_question(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResponse<QuestionResponse> {
    state.questions.get(id).await
}

/// Update a question; only set fields are applied
#[utoipa::path(
    put,
    path = "/api/v1/questions/{id}",
    tag = "Question Management",
    params(("id" = i64, Path, description = "Internal ID of the question")),
    request_body = QuestionUpdateRequest,
    responses(
        (status = 200, description = "Question updated", body = QuestionResponse),
        (status = 404, description = "Question not found")
    )
)]
pub async fn update_question(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<QuestionUpdateRequest>,
) -> ApiResponse<QuestionResponse> {
    state.questions.update(id, payload).await
}

/// Delete a question by its internal ID
#[utoipa::path(
    delete,
    path = "/api/v1/questions/{id}",
    tag = "Question Management",
    params(("id" = i64, Path, description = "Internal ID of the question")),
    responses(
        (status = 200, description = "Question deleted"),
        (status = 404, description = "Question not found")
    )
)]
pub async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResponse<()> {
    state.questions.delete(id).await
}

/// Batch delete questions; missing ids are ignored
#[utoipa::path(
    delete,
    path = "/api/v1/questions/batch",
    tag = "Question Management",
    request_body = Vec<i64>,
    responses((status = 200, description = "Count of deleted questions"))
)]
pub async fn delete_questions(
    State(state): State<AppState>,
    Json(ids): Json<Vec<i64>>,
) -> ApiResponse<u64> {
    state.questions.delete_batch(ids).await
}

/// Check if a question exists
#[utoipa::path(
    get,
    path = "/api/v1/questions/exists/{id}",
    tag = "Question Management",
    params(("id" = i64, Path, description = "Internal ID of the question")),
    responses((status = 200, description = "Existence flag"))
)]
pub async fn question_exists(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResponse<bool> {
    state.questions.exists(id).await
}

/// Count all questions
#[utoipa::path(
    get,
    path = "/api/v1/questions/count",
    tag = "Question Management",
    responses((status = 200, description = "Question count"))
)]
pub async fn count_questions(State(state): State<AppState>) -> ApiResponse<u64> {
    state.questions.count(None).await
}

/// All questions belonging to one quiz
#[utoipa::path(
    get,
    path = "/api/v1/questions/quiz/{quizId}",
    tag = "Question Management",
    params(("quizId" = i64, Path, description = "Internal ID of the quiz")),
    responses((status = 200, description = "Questions of the quiz"))
)]
pub async fn questions_by_quiz(
    State(state): State<AppState>,
    Path(quiz_id): Path<i64>,
) -> ListResponse<QuestionResponse> {
    tracing::info!("Retrieving questions for quiz with ID: {}", quiz_id);
    match state.questions.service().find_by_quiz_id(quiz_id).await {
        Ok(questions) => ListResponse::success(state.questions.mapper().to_response_list(&questions)),
        Err(err) => {
            tracing::error!("Failed to retrieve questions for quiz {}: {}", quiz_id, err);
            ListResponse::failure(&err)
        }
    }
}

/// Questions of one quiz with correct answers, for review flows
#[utoipa::path(
    get,
    path = "/api/v1/questions/quiz/{quizId}/review",
    tag = "Question Management",
    params(("quizId" = i64, Path, description = "Internal ID of the quiz")),
    responses((status = 200, description = "Questions with answers", body = [QuestionReviewResponse]))
)]
pub async fn questions_by_quiz_for_review(
    State(state): State<AppState>,
    Path(quiz_id): Path<i64>,
) -> ListResponse<QuestionReviewResponse> {
    tracing::info!("Retrieving questions for review for quiz with ID: {}", quiz_id);
    match state.questions.service().find_by_quiz_id(quiz_id).await {
        Ok(questions) => {
            let mapper = state.questions.mapper();
            ListResponse::success(
                questions
                    .iter()
                    .map(|q| mapper.to_review_response(q))
                    .collect(),
            )
        }
        Err(err) => {
            tracing::error!(
                "Failed to retrieve questions for review for quiz {}: {}",
                quiz_id,
                err
            );
            ListResponse::failure(&err)
        }
    }
}

/// Sum of points over one quiz
#[utoipa::path(
    get,
    path = "/api/v1/questions/quiz/{quizId}/points",
    tag = "Question Management",
    params(("quizId" = i64, Path, description = "Internal ID of the quiz")),
    responses((status = 200, description = "Total points of the quiz"))
)]
pub async fn total_points_by_quiz(
    State(state): State<AppState>,
    Path(quiz_id): Path<i64>,
) -> ApiResponse<i64> {
    match state.questions.service().total_points_by_quiz_id(quiz_id).await {
        Ok(points) => ApiResponse::with_message(points, format!("Total points: {}", points)),
        Err(err) => {
            tracing::error!("Failed to sum points for quiz {}: {}", quiz_id, err);
            ApiResponse::failure(&err)
        }
    }
}

/// Questions of a given type, newest first
#[utoipa::path(
    get,
    path = "/api/v1/questions/type/{questionType}",
    tag = "Question Management",
    params(("questionType" = QuestionType, Path, description = "Question type")),
    responses((status = 200, description = "Questions of the type"))
)]
pub async fn questions_by_type(
    State(state): State<AppState>,
    Path(question_type): Path<QuestionType>,
) -> ListResponse<QuestionResponse> {
    match state.questions.service().find_by_type(question_type).await {
        Ok(questions) => ListResponse::success(state.questions.mapper().to_response_list(&questions)),
        Err(err) => {
            tracing::error!("Failed to retrieve questions by type: {}", err);
            ListResponse::failure(&err)
        }
    }
}
