//! Quiz database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{Quiz, QuizDifficulty};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "quizzes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub public_id: Uuid,
    #[sea_orm(unique)]
    pub title: String,
    pub category: Option<String>,
    pub difficulty: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub time_limit: i32,
    pub passing_score: i32,
    pub status: String,
    pub created_by: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::question::Entity")]
    Question,
}

impl Related<super::question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Question.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert a database row plus its question rows into the domain entity.
pub fn to_domain(model: Model, questions: Vec<super::question::Model>) -> Quiz {
    Quiz {
        id: model.id,
        public_id: model.public_id,
        title: model.title,
        category: model.category,
        difficulty: QuizDifficulty::from(model.difficulty.as_str()),
        description: model.description,
        time_limit: model.time_limit,
        passing_score: model.passing_score,
        status: model.status,
        created_by: model.created_by,
        questions: questions
            .into_iter()
            .map(domain::Question::from)
            .collect(),
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}
