//! Result repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use common::{AppError, AppResult};
use domain::QuizResult;

use super::entities::result::{self, Entity as ResultEntity};

/// Result repository trait for dependency injection.
#[async_trait]
pub trait ResultRepository: Send + Sync {
    /// All stored results, newest first.
    async fn find_all(&self) -> AppResult<Vec<QuizResult>>;

    /// Find result by internal id.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<QuizResult>>;

    /// Find the result recorded for a session.
    async fn find_by_session_id(&self, session_id: i64) -> AppResult<Option<QuizResult>>;

    /// Persist a new result.
    async fn insert(&self, result: QuizResult) -> AppResult<QuizResult>;

    /// Delete by internal id; deleting a missing id is not an error.
    async fn delete_by_id(&self, id: i64) -> AppResult<()>;
}

/// Concrete SeaORM-backed implementation of `ResultRepository`.
pub struct ResultStore {
    db: DatabaseConnection,
}

impl ResultStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResultRepository for ResultStore {
    async fn find_all(&self) -> AppResult<Vec<QuizResult>> {
        let models = ResultEntity::find()
            .order_by_desc(result::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(QuizResult::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<QuizResult>> {
        let model = ResultEntity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(QuizResult::from))
    }

    async fn find_by_session_id(&self, session_id: i64) -> AppResult<Option<QuizResult>> {
        let model = ResultEntity::find()
            .filter(result::Column::SessionId.eq(session_id))
            .one(&self.db)
            .await?;
        Ok(model.map(QuizResult::from))
    }

    async fn insert(&self, quiz_result: QuizResult) -> AppResult<QuizResult> {
        let model = result::ActiveModel {
            id: NotSet,
            session_id: Set(quiz_result.session_id),
            score: Set(quiz_result.score),
            details_json: Set(quiz_result.details_json.clone()),
            status: Set(quiz_result.status.as_str().to_string()),
            created_at: Set(quiz_result.created_at),
        }
        .insert(&self.db)
        .await
        .map_err(AppError::from)?;

        Ok(QuizResult::from(model))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        ResultEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}
