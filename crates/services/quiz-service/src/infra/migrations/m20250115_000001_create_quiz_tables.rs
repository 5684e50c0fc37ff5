//! Migration: Create the quizzes and questions tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Quizzes::Table)
                    .col(
                        ColumnDef::new(Quizzes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Quizzes::PublicId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Quizzes::Title).string().not_null().unique_key())
                    .col(ColumnDef::new(Quizzes::Category).string().null())
                    .col(ColumnDef::new(Quizzes::Difficulty).string().not_null())
                    .col(ColumnDef::new(Quizzes::Description).text().null())
                    .col(ColumnDef::new(Quizzes::TimeLimit).integer().not_null())
                    .col(ColumnDef::new(Quizzes::PassingScore).integer().not_null())
                    .col(ColumnDef::new(Quizzes::Status).string().not_null())
                    .col(ColumnDef::new(Quizzes::CreatedBy).string().null())
                    .col(
                        ColumnDef::new(Quizzes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Quizzes::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Questions::Table)
                    .col(
                        ColumnDef::new(Questions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Questions::QuizId).big_integer().not_null())
                    .col(ColumnDef::new(Questions::Text).text().not_null())
                    .col(ColumnDef::new(Questions::QuestionType).string().not_null())
                    .col(ColumnDef::new(Questions::Options).json_binary().not_null())
                    .col(
                        ColumnDef::new(Questions::CorrectAnswers)
                            .json_binary()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Questions::Points).integer().not_null())
                    .col(ColumnDef::new(Questions::Explanation).text().null())
                    .col(
                        ColumnDef::new(Questions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Questions::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    // A quiz owns its questions; deleting it removes them
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_questions_quiz_id")
                            .from(Questions::Table, Questions::QuizId)
                            .to(Quizzes::Table, Quizzes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_questions_quiz_id")
                    .table(Questions::Table)
                    .col(Questions::QuizId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Questions::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Quizzes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Quizzes {
    Table,
    Id,
    PublicId,
    Title,
    Category,
    Difficulty,
    Description,
    TimeLimit,
    PassingScore,
    Status,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Questions {
    Table,
    Id,
    QuizId,
    Text,
    QuestionType,
    Options,
    CorrectAnswers,
    Points,
    Explanation,
    CreatedAt,
    UpdatedAt,
}
