//! Question service unit tests over an in-memory repository.

mod support;

use std::sync::Arc;

use common::{AppError, CrudService, Mapper};
use domain::{Question, QuestionType};
use quiz_service_lib::api::dto::QuestionUpdateRequest;
use quiz_service_lib::api::mapper::QuestionMapper;
use quiz_service_lib::service::QuestionService;
use support::{sample_question, InMemoryQuestionRepository};

fn service_with(repo: Arc<InMemoryQuestionRepository>) -> QuestionService {
    QuestionService::new(repo)
}

fn question_with_points(points: i32) -> Question {
    Question {
        points,
        ..sample_question(1, "2 + 2?")
    }
}

#[tokio::test]
async fn save_then_find_by_id_round_trips() {
    let service = service_with(Arc::new(InMemoryQuestionRepository::new()));

    let saved = service.save(sample_question(1, "2 + 2?")).await.unwrap();
    assert!(saved.id > 0);

    let found = service.find_by_id(saved.id).await.unwrap().unwrap();
    assert_eq!(found.text, "2 + 2?");
    assert_eq!(found.question_type, QuestionType::SingleChoice);
    assert_eq!(found.correct_answers, vec!["4".to_string()]);
    assert_eq!(found.points, 2);
}

#[tokio::test]
async fn save_rejects_non_positive_points() {
    let service = service_with(Arc::new(InMemoryQuestionRepository::new()));

    let result = service.save(question_with_points(0)).await;

    match result {
        Err(AppError::Validation(msg)) => {
            assert!(msg.contains("points"));
        }
        other => panic!("expected validation error, got {:?}", other.map(|q| q.id)),
    }
}

#[tokio::test]
async fn save_rejects_blank_text() {
    let service = service_with(Arc::new(InMemoryQuestionRepository::new()));

    let mut question = sample_question(1, "   ");
    question.text = "   ".to_string();
    let result = service.save(question).await;

    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn save_rejects_missing_correct_answers() {
    let service = service_with(Arc::new(InMemoryQuestionRepository::new()));

    let mut question = sample_question(1, "2 + 2?");
    question.correct_answers.clear();
    let result = service.save(question).await;

    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn batch_save_rejects_whole_batch_on_one_invalid_member() {
    let repo = Arc::new(InMemoryQuestionRepository::new());
    let service = service_with(repo.clone());

    let result = service
        .save_all(vec![sample_question(1, "Valid?"), question_with_points(0)])
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    // nothing was persisted
    assert!(repo.contents().is_empty());
}

#[tokio::test]
async fn batch_save_persists_all_valid_members() {
    let service = service_with(Arc::new(InMemoryQuestionRepository::new()));

    let saved = service
        .save_all(vec![sample_question(1, "First?"), sample_question(1, "Second?")])
        .await
        .unwrap();

    assert_eq!(saved.len(), 2);
    assert!(saved.iter().all(|q| q.id > 0));
}

#[tokio::test]
async fn quiz_scoped_queries_filter_by_quiz() {
    let repo = Arc::new(InMemoryQuestionRepository::seeded(vec![
        sample_question(1, "A?"),
        sample_question(1, "B?"),
        sample_question(2, "C?"),
    ]));
    let service = service_with(repo);

    let questions = service.find_by_quiz_id(1).await.unwrap();
    assert_eq!(questions.len(), 2);

    assert_eq!(service.count_by_quiz_id(1).await.unwrap(), 2);
    assert_eq!(service.count_by_quiz_id(2).await.unwrap(), 1);

    let by_quiz_and_type = service
        .find_by_quiz_id_and_type(1, QuestionType::SingleChoice)
        .await
        .unwrap();
    assert_eq!(by_quiz_and_type.len(), 2);

    let none_of_type = service
        .find_by_quiz_id_and_type(1, QuestionType::CodeChallenge)
        .await
        .unwrap();
    assert!(none_of_type.is_empty());
}

#[tokio::test]
async fn total_points_sums_over_one_quiz_and_defaults_to_zero() {
    let mut heavy = sample_question(1, "Hard one?");
    heavy.points = 10;
    let repo = Arc::new(InMemoryQuestionRepository::seeded(vec![
        sample_question(1, "A?"),
        heavy,
        sample_question(2, "C?"),
    ]));
    let service = service_with(repo);

    assert_eq!(service.total_points_by_quiz_id(1).await.unwrap(), 12);
    assert_eq!(service.total_points_by_quiz_id(99).await.unwrap(), 0);
}

#[tokio::test]
async fn minimum_points_query_orders_highest_first() {
    let mut five = sample_question(1, "Five?");
    five.points = 5;
    let mut ten = sample_question(1, "Ten?");
    ten.points = 10;
    let repo = Arc::new(InMemoryQuestionRepository::seeded(vec![
        sample_question(1, "Two?"),
        five,
        ten,
    ]));
    let service = service_with(repo);

    let questions = service.find_by_minimum_points(5).await.unwrap();
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].points, 10);
    assert_eq!(questions[1].points, 5);
}

#[tokio::test]
async fn update_applies_only_set_fields() {
    let service = service_with(Arc::new(InMemoryQuestionRepository::new()));
    let saved = service.save(sample_question(1, "2 + 2?")).await.unwrap();

    let mapper = QuestionMapper;
    let patch = mapper.to_patch(QuestionUpdateRequest {
        points: Some(7),
        ..Default::default()
    });
    let updated = service.update(saved.id, &patch).await.unwrap();

    assert_eq!(updated.points, 7);
    assert_eq!(updated.text, saved.text);
    assert_eq!(updated.correct_answers, saved.correct_answers);
}

#[tokio::test]
async fn update_on_missing_id_is_not_found() {
    let service = service_with(Arc::new(InMemoryQuestionRepository::new()));

    let mapper = QuestionMapper;
    let patch = mapper.to_patch(QuestionUpdateRequest {
        points: Some(7),
        ..Default::default()
    });
    let result = service.update(12345, &patch).await;

    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn delete_all_by_ids_ignores_missing_ids() {
    let service = service_with(Arc::new(InMemoryQuestionRepository::new()));
    let a = service.save(sample_question(1, "A?")).await.unwrap();

    let deleted = service.delete_all_by_ids(&[a.id, 777]).await.unwrap();

    assert_eq!(deleted, 1);
    assert_eq!(service.count().await.unwrap(), 0);
}
