//! Request, response and filter DTOs for the quiz service.
//!
//! Response DTOs deliberately omit sensitive fields: a regular question
//! response never contains the correct answers; the dedicated review
//! response does.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use domain::{Quiz, QuestionType, QuizDifficulty};

// =============================================================================
// Quiz DTOs
// =============================================================================

/// Quiz creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuizRequest {
    #[validate(length(min = 1, message = "Quiz title is required"))]
    #[schema(example = "Rust Basics")]
    pub title: String,
    pub category: Option<String>,
    pub difficulty: QuizDifficulty,
    pub description: Option<String>,
    /// Time limit in minutes
    #[validate(range(min = 1, max = 180, message = "Time limit must be between 1 and 180 minutes"))]
    pub time_limit: i32,
    /// Passing score as a percentage
    #[validate(range(min = 0, max = 100, message = "Passing score must be between 0 and 100"))]
    pub passing_score: i32,
    /// Lifecycle tag; defaults to DRAFT
    pub status: Option<String>,
    pub created_by: Option<String>,
    /// Questions created together with the quiz
    #[validate(nested)]
    pub questions: Option<Vec<QuizQuestionRequest>>,
}

/// Question payload nested inside a quiz creation request.
/// The parent reference is implied, so there is no quiz id here.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestionRequest {
    #[validate(length(min = 1, message = "Question text is required"))]
    pub text: String,
    pub question_type: QuestionType,
    #[serde(default)]
    pub options: Vec<String>,
    #[validate(length(min = 1, message = "Question must have at least one correct answer"))]
    pub correct_answers: Vec<String>,
    #[validate(range(min = 1, message = "Question points must be greater than 0"))]
    pub points: i32,
    pub explanation: Option<String>,
}

/// Partial quiz update; only set fields are applied.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuizUpdateRequest {
    pub title: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<QuizDifficulty>,
    pub description: Option<String>,
    #[validate(range(min = 1, max = 180, message = "Time limit must be between 1 and 180 minutes"))]
    pub time_limit: Option<i32>,
    #[validate(range(min = 0, max = 100, message = "Passing score must be between 0 and 100"))]
    pub passing_score: Option<i32>,
    pub status: Option<String>,
    pub created_by: Option<String>,
}

/// Quiz response; question entries hide the correct answers.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuizResponse {
    pub public_id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub difficulty: QuizDifficulty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub time_limit: i32,
    pub passing_score: i32,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<QuestionResponse>>,
    pub created_at: DateTime<Utc>,
}

/// Quiz list filter, bound from query parameters.
#[derive(Debug, Default, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuizFilter {
    pub category: Option<String>,
    pub difficulty: Option<QuizDifficulty>,
    pub status: Option<String>,
    pub min_passing_score: Option<i32>,
}

impl QuizFilter {
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.difficulty.is_none()
            && self.status.is_none()
            && self.min_passing_score.is_none()
    }

    /// Predicate applied over the materialized quiz list.
    pub fn matches(&self, quiz: &Quiz) -> bool {
        if let Some(category) = &self.category {
            match &quiz.category {
                Some(c) if c.eq_ignore_ascii_case(category) => {}
                _ => return false,
            }
        }
        if let Some(difficulty) = self.difficulty {
            if quiz.difficulty != difficulty {
                return false;
            }
        }
        if let Some(status) = &self.status {
            if quiz.status != *status {
                return false;
            }
        }
        if let Some(min) = self.min_passing_score {
            if quiz.passing_score < min {
                return false;
            }
        }
        true
    }
}

// =============================================================================
// Question DTOs
// =============================================================================

/// Standalone question creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRequest {
    /// Internal id of the owning quiz
    pub quiz_id: i64,
    #[validate(length(min = 1, message = "Question text is required"))]
    pub text: String,
    pub question_type: QuestionType,
    #[serde(default)]
    pub options: Vec<String>,
    #[validate(length(min = 1, message = "Question must have at least one correct answer"))]
    pub correct_answers: Vec<String>,
    #[validate(range(min = 1, message = "Question points must be greater than 0"))]
    pub points: i32,
    pub explanation: Option<String>,
}

/// Partial question update; only set fields are applied, lists only when
/// non-empty.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionUpdateRequest {
    pub text: Option<String>,
    pub question_type: Option<QuestionType>,
    pub options: Option<Vec<String>>,
    pub correct_answers: Option<Vec<String>>,
    #[validate(range(min = 1, message = "Question points must be greater than 0"))]
    pub points: Option<i32>,
    pub explanation: Option<String>,
}

/// Question response for participants; correct answers and explanation are
/// stripped.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    pub id: i64,
    pub text: String,
    pub question_type: QuestionType,
    pub options: Vec<String>,
    pub points: i32,
}

/// Question response for authorized review flows; includes the answers.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionReviewResponse {
    pub id: i64,
    pub text: String,
    pub question_type: QuestionType,
    pub options: Vec<String>,
    pub correct_answers: Vec<String>,
    pub points: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Question list filter placeholder.
///
/// The list endpoint currently serves unfiltered pages; the type exists so
/// the question service slots into the generic layer and can grow real
/// predicates without an API change.
#[derive(Debug, Default, Clone, Deserialize, ToSchema)]
pub struct QuestionFilter {}
