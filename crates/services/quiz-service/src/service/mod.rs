//! Business services for quizzes and questions.

pub mod question_service;
pub mod quiz_service;

pub use question_service::QuestionService;
pub use quiz_service::QuizService;
