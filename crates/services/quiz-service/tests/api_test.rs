//! Router-level tests for the quiz service HTTP surface.
//!
//! These drive the real router over in-memory repositories, asserting the
//! envelope shape and the error-code → status mapping.

mod support;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use quiz_service_lib::api::{create_router, AppState};
use support::{sample_quiz, InMemoryQuestionRepository, InMemoryQuizRepository};

fn app_with(
    quizzes: Arc<InMemoryQuizRepository>,
    questions: Arc<InMemoryQuestionRepository>,
) -> axum::Router {
    create_router(AppState::with_repositories(quizzes, questions))
}

fn empty_app() -> axum::Router {
    app_with(
        Arc::new(InMemoryQuizRepository::new()),
        Arc::new(InMemoryQuestionRepository::new()),
    )
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn create_quiz_returns_201_with_envelope_and_category_header() {
    let app = empty_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/quizzes",
            json!({
                "title": "Rust Basics",
                "category": "programming",
                "difficulty": "MEDIUM",
                "timeLimit": 30,
                "passingScore": 60
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get("x-quiz-category").unwrap(),
        "programming"
    );

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["title"], "Rust Basics");
    assert!(body["data"]["publicId"].as_str().is_some());
    assert!(body.get("errorCode").is_none());
}

#[tokio::test]
async fn create_quiz_with_invalid_time_limit_returns_400() {
    let app = empty_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/quizzes",
            json!({
                "title": "Bad Quiz",
                "difficulty": "EASY",
                "timeLimit": 0,
                "passingScore": 60
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn duplicate_title_returns_409_with_conflict_code() {
    let quizzes = Arc::new(InMemoryQuizRepository::seeded(vec![sample_quiz(
        "Rust Basics",
    )]));
    let app = app_with(quizzes, Arc::new(InMemoryQuestionRepository::new()));

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/quizzes",
            json!({
                "title": "Rust Basics",
                "difficulty": "MEDIUM",
                "timeLimit": 30,
                "passingScore": 60
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["errorCode"], "CONFLICT");
}

#[tokio::test]
async fn get_unknown_quiz_returns_404_envelope() {
    let app = empty_app();

    let response = app
        .oneshot(get_request(&format!("/api/v1/quizzes/{}", Uuid::new_v4())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["errorCode"], "NOT_FOUND");
}

#[tokio::test]
async fn list_page_carries_page_info_over_seeded_quizzes() {
    let quizzes = (1..=5).map(|i| sample_quiz(&format!("Quiz {}", i))).collect();
    let app = app_with(
        Arc::new(InMemoryQuizRepository::seeded(quizzes)),
        Arc::new(InMemoryQuestionRepository::new()),
    );

    let response = app
        .oneshot(get_request("/api/v1/quizzes?page=0&size=2"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["pageInfo"]["page"], 0);
    assert_eq!(body["pageInfo"]["size"], 2);
    assert_eq!(body["pageInfo"]["totalElements"], 5);
    assert_eq!(body["pageInfo"]["totalPages"], 3);
}

#[tokio::test]
async fn archive_returns_202_and_archived_status() {
    let quizzes = Arc::new(InMemoryQuizRepository::seeded(vec![sample_quiz(
        "Rust Basics",
    )]));
    let public_id = quizzes.contents()[0].public_id;
    let app = app_with(quizzes, Arc::new(InMemoryQuestionRepository::new()));

    let response = app
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri(format!("/api/v1/quizzes/{}/archive", public_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "ARCHIVED");
}

#[tokio::test]
async fn archive_on_missing_quiz_returns_404() {
    let app = empty_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri(format!("/api/v1/quizzes/{}/archive", Uuid::new_v4()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_quiz_returns_success_message_envelope() {
    let quizzes = Arc::new(InMemoryQuizRepository::seeded(vec![sample_quiz(
        "Rust Basics",
    )]));
    let public_id = quizzes.contents()[0].public_id;
    let app = app_with(quizzes, Arc::new(InMemoryQuestionRepository::new()));

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/v1/quizzes/{}", public_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "QUIZ deleted successfully");
}

#[tokio::test]
async fn create_question_without_correct_answers_returns_400() {
    let app = empty_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/questions",
            json!({
                "quizId": 1,
                "text": "2 + 2?",
                "questionType": "SINGLE_CHOICE",
                "options": ["3", "4"],
                "correctAnswers": [],
                "points": 2
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn question_review_endpoint_exposes_correct_answers() {
    let questions = Arc::new(InMemoryQuestionRepository::seeded(vec![
        support::sample_question(1, "2 + 2?"),
    ]));
    let app = app_with(Arc::new(InMemoryQuizRepository::new()), questions);

    let regular = app
        .clone()
        .oneshot(get_request("/api/v1/questions/quiz/1"))
        .await
        .unwrap();
    let regular_body = body_json(regular).await;
    assert!(regular_body["data"][0].get("correctAnswers").is_none());

    let review = app
        .oneshot(get_request("/api/v1/questions/quiz/1/review"))
        .await
        .unwrap();
    let review_body = body_json(review).await;
    assert_eq!(review_body["data"][0]["correctAnswers"][0], "4");
}

#[tokio::test]
async fn exists_and_count_report_the_store_state() {
    let quizzes = Arc::new(InMemoryQuizRepository::seeded(vec![sample_quiz(
        "Rust Basics",
    )]));
    let public_id = quizzes.contents()[0].public_id;
    let app = app_with(quizzes, Arc::new(InMemoryQuestionRepository::new()));

    let exists = app
        .clone()
        .oneshot(get_request(&format!("/api/v1/quizzes/exists/{}", public_id)))
        .await
        .unwrap();
    let exists_body = body_json(exists).await;
    assert_eq!(exists_body["data"], true);

    let count = app
        .oneshot(get_request("/api/v1/quizzes/count"))
        .await
        .unwrap();
    let count_body = body_json(count).await;
    assert_eq!(count_body["data"], 1);
}

#[tokio::test]
async fn health_endpoint_reports_up() {
    let app = empty_app();

    let response = app.oneshot(get_request("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "UP");
    assert_eq!(body["service"], "quiz-service");
}
