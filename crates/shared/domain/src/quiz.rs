//! Quiz domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::QUIZ_STATUS_DRAFT;
use crate::question::Question;

/// Quiz difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuizDifficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl QuizDifficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuizDifficulty::Easy => "EASY",
            QuizDifficulty::Medium => "MEDIUM",
            QuizDifficulty::Hard => "HARD",
            QuizDifficulty::Expert => "EXPERT",
        }
    }
}

impl From<&str> for QuizDifficulty {
    fn from(s: &str) -> Self {
        match s {
            "EASY" => QuizDifficulty::Easy,
            "HARD" => QuizDifficulty::Hard,
            "EXPERT" => QuizDifficulty::Expert,
            _ => QuizDifficulty::Medium,
        }
    }
}

impl std::fmt::Display for QuizDifficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Quiz domain entity.
///
/// A quiz carries a stable `public_id` which is the only identifier exposed
/// through the API; the internal `id` never leaves the service boundary.
/// A quiz owns its questions: deleting the quiz removes them as well.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub id: i64,
    pub public_id: Uuid,
    pub title: String,
    pub category: Option<String>,
    pub difficulty: QuizDifficulty,
    pub description: Option<String>,
    /// Time limit in minutes
    pub time_limit: i32,
    /// Passing score as a percentage
    pub passing_score: i32,
    /// Lifecycle tag; see the `QUIZ_STATUS_*` constants
    pub status: String,
    pub created_by: Option<String>,
    pub questions: Vec<Question>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Quiz {
    /// Create a new, not-yet-persisted quiz in DRAFT status.
    ///
    /// The internal id is assigned by the repository on insert; the public id
    /// is generated here and never changes afterwards.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: String,
        category: Option<String>,
        difficulty: QuizDifficulty,
        description: Option<String>,
        time_limit: i32,
        passing_score: i32,
        status: Option<String>,
        created_by: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            public_id: Uuid::new_v4(),
            title,
            category,
            difficulty,
            description,
            time_limit,
            passing_score,
            status: status.unwrap_or_else(|| QUIZ_STATUS_DRAFT.to_string()),
            created_by,
            questions: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach a question, fixing up its back-reference.
    pub fn add_question(&mut self, mut question: Question) {
        question.quiz_id = self.id;
        self.questions.push(question);
    }

    pub fn is_archived(&self) -> bool {
        self.status == crate::constants::QUIZ_STATUS_ARCHIVED
    }
}
