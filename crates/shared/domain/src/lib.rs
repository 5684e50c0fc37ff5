//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! All types here are shared across the quiz platform microservices.

pub mod constants;
pub mod question;
pub mod quiz;
pub mod result;

pub use constants::*;
pub use question::{Question, QuestionType};
pub use quiz::{Quiz, QuizDifficulty};
pub use result::{QuizResult, ResultStatus};
