//! Result database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{QuizResult, ResultStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "results")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub session_id: i64,
    pub score: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub details_json: Option<String>,
    pub status: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for QuizResult {
    fn from(model: Model) -> Self {
        QuizResult {
            id: model.id,
            session_id: model.session_id,
            score: model.score,
            details_json: model.details_json,
            status: ResultStatus::from(model.status.as_str()),
            created_at: model.created_at,
        }
    }
}
