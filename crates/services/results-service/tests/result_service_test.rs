//! Result service unit tests over a mocked repository.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use mockall::predicate::eq;

use common::{AppError, AppResult};
use domain::{QuizResult, ResultStatus};
use results_service_lib::api::dto::ResultRequest;
use results_service_lib::repository::ResultRepository;
use results_service_lib::service::ResultService;

mock! {
    ResultRepo {}

    #[async_trait]
    impl ResultRepository for ResultRepo {
        async fn find_all(&self) -> AppResult<Vec<QuizResult>>;
        async fn find_by_id(&self, id: i64) -> AppResult<Option<QuizResult>>;
        async fn find_by_session_id(&self, session_id: i64) -> AppResult<Option<QuizResult>>;
        async fn insert(&self, result: QuizResult) -> AppResult<QuizResult>;
        async fn delete_by_id(&self, id: i64) -> AppResult<()>;
    }
}

fn stored_result(id: i64, session_id: i64) -> QuizResult {
    QuizResult {
        id,
        session_id,
        score: 87.5,
        details_json: Some(r#"{"correct":7,"total":8}"#.to_string()),
        status: ResultStatus::Passed,
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn save_stamps_creation_time_server_side() {
    let mut repo = MockResultRepo::new();
    repo.expect_insert()
        .withf(|r| r.session_id == 42 && r.created_at <= Utc::now())
        .returning(|r| Ok(QuizResult { id: 1, ..r }));

    let service = ResultService::new(Arc::new(repo));
    let before = Utc::now();
    let saved = service
        .save(ResultRequest {
            session_id: 42,
            score: 87.5,
            details_json: None,
            status: ResultStatus::Passed,
        })
        .await
        .unwrap();

    assert_eq!(saved.id, 1);
    assert_eq!(saved.session_id, 42);
    assert!(saved.created_at >= before);
}

#[tokio::test]
async fn find_by_id_maps_to_response() {
    let mut repo = MockResultRepo::new();
    repo.expect_find_by_id()
        .with(eq(1))
        .returning(|id| Ok(Some(stored_result(id, 42))));

    let service = ResultService::new(Arc::new(repo));
    let found = service.find_by_id(1).await.unwrap().unwrap();

    assert_eq!(found.id, 1);
    assert_eq!(found.score, 87.5);
    assert_eq!(found.status, ResultStatus::Passed);
}

#[tokio::test]
async fn find_by_session_id_returns_none_when_absent() {
    let mut repo = MockResultRepo::new();
    repo.expect_find_by_session_id().returning(|_| Ok(None));

    let service = ResultService::new(Arc::new(repo));
    let found = service.find_by_session_id(999).await.unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn find_all_maps_every_record() {
    let mut repo = MockResultRepo::new();
    repo.expect_find_all()
        .returning(|| Ok(vec![stored_result(1, 42), stored_result(2, 43)]));

    let service = ResultService::new(Arc::new(repo));
    let all = service.find_all().await.unwrap();

    assert_eq!(all.len(), 2);
    assert_eq!(all[0].session_id, 42);
}

#[tokio::test]
async fn delete_passes_through_without_existence_check() {
    let mut repo = MockResultRepo::new();
    repo.expect_delete_by_id().with(eq(7)).returning(|_| Ok(()));

    let service = ResultService::new(Arc::new(repo));
    assert!(service.delete(7).await.is_ok());
}

#[tokio::test]
async fn repository_errors_propagate() {
    let mut repo = MockResultRepo::new();
    repo.expect_find_all()
        .returning(|| Err(AppError::internal("boom")));

    let service = ResultService::new(Arc::new(repo));
    let result = service.find_all().await;

    assert!(matches!(result, Err(AppError::Internal(_))));
}
