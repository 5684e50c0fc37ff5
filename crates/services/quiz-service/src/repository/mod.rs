//! Data access layer: repository traits and their SeaORM implementations.

pub mod entities;
pub mod question_repository;
pub mod quiz_repository;

pub use question_repository::{QuestionRepository, QuestionStore};
pub use quiz_repository::{QuizRepository, QuizStore};
