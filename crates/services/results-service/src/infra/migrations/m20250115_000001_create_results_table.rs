//! Migration: Create the results table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Results::Table)
                    .col(
                        ColumnDef::new(Results::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    // References the session service's record; not a
                    // foreign-key-enforced relationship
                    .col(ColumnDef::new(Results::SessionId).big_integer().not_null())
                    .col(ColumnDef::new(Results::Score).double().not_null())
                    .col(ColumnDef::new(Results::DetailsJson).text().null())
                    .col(ColumnDef::new(Results::Status).string().not_null())
                    .col(
                        ColumnDef::new(Results::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_results_session_id")
                    .table(Results::Table)
                    .col(Results::SessionId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Results::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Results {
    Table,
    Id,
    SessionId,
    Score,
    DetailsJson,
    Status,
    CreatedAt,
}
