//! Request and response DTOs for the results service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use domain::{QuizResult, ResultStatus};

/// Result creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResultRequest {
    /// Session the attempt belongs to
    pub session_id: i64,
    #[validate(range(min = 0.0, message = "score must be non-negative"))]
    pub score: f64,
    /// Free-form per-question breakdown as serialized JSON
    pub details_json: Option<String>,
    pub status: ResultStatus,
}

/// Result response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResultResponse {
    pub id: i64,
    pub session_id: i64,
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details_json: Option<String>,
    pub status: ResultStatus,
    pub created_at: DateTime<Utc>,
}

impl From<QuizResult> for ResultResponse {
    fn from(result: QuizResult) -> Self {
        Self {
            id: result.id,
            session_id: result.session_id,
            score: result.score,
            details_json: result.details_json,
            status: result.status,
            created_at: result.created_at,
        }
    }
}
