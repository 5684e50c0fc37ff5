//! Question domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Supported question types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionType {
    SingleChoice,
    MultipleChoice,
    TrueFalse,
    TextInput,
    CodeChallenge,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::SingleChoice => "SINGLE_CHOICE",
            QuestionType::MultipleChoice => "MULTIPLE_CHOICE",
            QuestionType::TrueFalse => "TRUE_FALSE",
            QuestionType::TextInput => "TEXT_INPUT",
            QuestionType::CodeChallenge => "CODE_CHALLENGE",
        }
    }
}

impl From<&str> for QuestionType {
    fn from(s: &str) -> Self {
        match s {
            "MULTIPLE_CHOICE" => QuestionType::MultipleChoice,
            "TRUE_FALSE" => QuestionType::TrueFalse,
            "TEXT_INPUT" => QuestionType::TextInput,
            "CODE_CHALLENGE" => QuestionType::CodeChallenge,
            _ => QuestionType::SingleChoice,
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Question domain entity.
///
/// A question always belongs to exactly one quiz; its lifecycle is owned by
/// the parent. Correct answers are never exposed through the regular response
/// path, only through the review flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub quiz_id: i64,
    pub text: String,
    pub question_type: QuestionType,
    pub options: Vec<String>,
    pub correct_answers: Vec<String>,
    pub points: i32,
    pub explanation: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Question {
    /// Create a new, not-yet-persisted question.
    pub fn new(
        quiz_id: i64,
        text: String,
        question_type: QuestionType,
        options: Vec<String>,
        correct_answers: Vec<String>,
        points: i32,
        explanation: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            quiz_id,
            text,
            question_type,
            options,
            correct_answers,
            points,
            explanation,
            created_at: now,
            updated_at: now,
        }
    }
}
