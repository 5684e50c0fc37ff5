//! Application state - the wired service/mapper pairs.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use common::CrudApi;

use super::mapper::{QuestionMapper, QuizMapper};
use crate::repository::{QuestionRepository, QuestionStore, QuizRepository, QuizStore};
use crate::service::{QuestionService, QuizService};

#[derive(Clone)]
pub struct AppState {
    pub quizzes: Arc<CrudApi<QuizService, QuizMapper>>,
    pub questions: Arc<CrudApi<QuestionService, QuestionMapper>>,
}

impl AppState {
    /// Wire the full stack over a live database connection.
    pub fn new(db: DatabaseConnection) -> Self {
        let quiz_repo: Arc<dyn QuizRepository> = Arc::new(QuizStore::new(db.clone()));
        let question_repo: Arc<dyn QuestionRepository> = Arc::new(QuestionStore::new(db));
        Self::with_repositories(quiz_repo, question_repo)
    }

    /// Wire the stack over externally supplied repositories (tests inject
    /// in-memory fakes here).
    pub fn with_repositories(
        quiz_repo: Arc<dyn QuizRepository>,
        question_repo: Arc<dyn QuestionRepository>,
    ) -> Self {
        let quiz_service = Arc::new(QuizService::new(quiz_repo));
        let question_service = Arc::new(QuestionService::new(question_repo));

        Self {
            quizzes: Arc::new(CrudApi::new(quiz_service, QuizMapper::new(), "QUIZ")),
            questions: Arc::new(CrudApi::new(question_service, QuestionMapper, "QUESTION")),
        }
    }
}
