//! Quiz attempt result entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of a quiz attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultStatus {
    InProgress,
    Completed,
    Passed,
    Failed,
    Abandoned,
}

impl ResultStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultStatus::InProgress => "IN_PROGRESS",
            ResultStatus::Completed => "COMPLETED",
            ResultStatus::Passed => "PASSED",
            ResultStatus::Failed => "FAILED",
            ResultStatus::Abandoned => "ABANDONED",
        }
    }
}

impl From<&str> for ResultStatus {
    fn from(s: &str) -> Self {
        match s {
            "COMPLETED" => ResultStatus::Completed,
            "PASSED" => ResultStatus::Passed,
            "FAILED" => ResultStatus::Failed,
            "ABANDONED" => ResultStatus::Abandoned,
            _ => ResultStatus::InProgress,
        }
    }
}

impl std::fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of a quiz attempt.
///
/// The session id references the session service's record; it is not a
/// foreign-key-enforced relationship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResult {
    pub id: i64,
    pub session_id: i64,
    pub score: f64,
    /// Free-form per-question breakdown as serialized JSON
    pub details_json: Option<String>,
    pub status: ResultStatus,
    pub created_at: DateTime<Utc>,
}
