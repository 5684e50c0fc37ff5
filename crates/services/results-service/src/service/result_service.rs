//! Result business service.
//!
//! Plain create/read/delete over session-keyed result records; this service
//! intentionally does not use the shared generic CRUD layer.

use std::sync::Arc;

use chrono::Utc;

use common::AppResult;
use domain::QuizResult;

use crate::api::dto::{ResultRequest, ResultResponse};
use crate::repository::ResultRepository;

pub struct ResultService {
    repo: Arc<dyn ResultRepository>,
}

impl ResultService {
    pub fn new(repo: Arc<dyn ResultRepository>) -> Self {
        Self { repo }
    }

    pub async fn find_all(&self) -> AppResult<Vec<ResultResponse>> {
        let results = self.repo.find_all().await?;
        Ok(results.into_iter().map(ResultResponse::from).collect())
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<ResultResponse>> {
        Ok(self.repo.find_by_id(id).await?.map(ResultResponse::from))
    }

    pub async fn find_by_session_id(&self, session_id: i64) -> AppResult<Option<ResultResponse>> {
        Ok(self
            .repo
            .find_by_session_id(session_id)
            .await?
            .map(ResultResponse::from))
    }

    /// Persist a new result; the creation time is stamped server-side.
    pub async fn save(&self, request: ResultRequest) -> AppResult<ResultResponse> {
        let result = QuizResult {
            id: 0,
            session_id: request.session_id,
            score: request.score,
            details_json: request.details_json,
            status: request.status,
            created_at: Utc::now(),
        };

        let saved = self.repo.insert(result).await?;
        tracing::info!("Recorded result for session {}", saved.session_id);
        Ok(ResultResponse::from(saved))
    }

    /// Delete a result; a missing id is not an error.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repo.delete_by_id(id).await
    }
}
