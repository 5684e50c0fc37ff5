//! Question business service.

use std::sync::Arc;

use async_trait::async_trait;

use common::{AppError, AppResult, CrudService, Repository};
use domain::{Question, QuestionType, MIN_QUESTION_POINTS};

use crate::api::dto::QuestionFilter;
use crate::repository::QuestionRepository;

pub struct QuestionService {
    repo: Arc<dyn QuestionRepository>,
}

impl QuestionService {
    pub fn new(repo: Arc<dyn QuestionRepository>) -> Self {
        Self { repo }
    }

    fn validate(question: &Question) -> AppResult<()> {
        if question.points < MIN_QUESTION_POINTS {
            return Err(AppError::validation(
                "Question points must be greater than 0",
            ));
        }
        if question.text.trim().is_empty() {
            return Err(AppError::validation("Question text cannot be empty"));
        }
        if question.correct_answers.is_empty() {
            return Err(AppError::validation(
                "Question must have at least one correct answer",
            ));
        }
        Ok(())
    }

    pub async fn find_by_quiz_id(&self, quiz_id: i64) -> AppResult<Vec<Question>> {
        tracing::debug!("Finding questions for quiz with ID: {}", quiz_id);
        self.repo.find_by_quiz_id(quiz_id).await
    }

    pub async fn find_by_type(&self, question_type: QuestionType) -> AppResult<Vec<Question>> {
        tracing::debug!("Finding questions by type: {}", question_type);
        self.repo.find_by_type(question_type).await
    }

    pub async fn find_by_quiz_id_and_type(
        &self,
        quiz_id: i64,
        question_type: QuestionType,
    ) -> AppResult<Vec<Question>> {
        tracing::debug!(
            "Finding questions for quiz ID: {} and type: {}",
            quiz_id,
            question_type
        );
        self.repo.find_by_quiz_id_and_type(quiz_id, question_type).await
    }

    pub async fn find_by_minimum_points(&self, min_points: i32) -> AppResult<Vec<Question>> {
        tracing::debug!("Finding questions with minimum points: {}", min_points);
        self.repo.find_by_minimum_points(min_points).await
    }

    pub async fn count_by_quiz_id(&self, quiz_id: i64) -> AppResult<u64> {
        tracing::debug!("Counting questions for quiz with ID: {}", quiz_id);
        self.repo.count_by_quiz_id(quiz_id).await
    }

    pub async fn total_points_by_quiz_id(&self, quiz_id: i64) -> AppResult<i64> {
        tracing::debug!("Calculating total points for quiz with ID: {}", quiz_id);
        self.repo.total_points_by_quiz_id(quiz_id).await
    }
}

#[async_trait]
impl CrudService for QuestionService {
    type Entity = Question;
    type Id = i64;
    type Filter = QuestionFilter;

    fn repository(&self) -> &dyn Repository<Question, i64> {
        self.repo.as_ref()
    }

    /// Validate-then-save: every create path runs the question invariants.
    async fn save(&self, question: Question) -> AppResult<Question> {
        Self::validate(&question)?;
        tracing::info!("Validating and saving question: {}", question.text);
        self.repo.insert(question).await
    }

    /// Batch variant; the whole batch is validated before anything is
    /// persisted, so an invalid member rejects the entire request.
    async fn save_all(&self, questions: Vec<Question>) -> AppResult<Vec<Question>> {
        for question in &questions {
            Self::validate(question)?;
        }
        tracing::info!("Validating and saving {} questions", questions.len());
        self.repo.insert_all(questions).await
    }
}
