//! Question database entity for SeaORM.
//!
//! Options and correct answers are stored as JSON arrays of strings.

use sea_orm::entity::prelude::*;

use domain::{Question, QuestionType};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub quiz_id: i64,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub question_type: String,
    pub options: Json,
    pub correct_answers: Json,
    pub points: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub explanation: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::quiz::Entity",
        from = "Column::QuizId",
        to = "super::quiz::Column::Id",
        on_delete = "Cascade"
    )]
    Quiz,
}

impl Related<super::quiz::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quiz.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Question {
    fn from(model: Model) -> Self {
        Question {
            id: model.id,
            quiz_id: model.quiz_id,
            text: model.text,
            question_type: QuestionType::from(model.question_type.as_str()),
            options: string_list(model.options),
            correct_answers: string_list(model.correct_answers),
            points: model.points,
            explanation: model.explanation,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

fn string_list(value: Json) -> Vec<String> {
    serde_json::from_value(value).unwrap_or_default()
}
