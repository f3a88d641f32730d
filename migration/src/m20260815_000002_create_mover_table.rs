use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Mover::Table)
                    .if_not_exists()
                    .col(pk_auto(Mover::Id))
                    .col(string(Mover::Name))
                    .col(double(Mover::WeightLimit))
                    .col(string(Mover::QuestState))
                    .col(integer(Mover::MissionsCompleted).default(0))
                    .col(
                        timestamp(Mover::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Mover::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Mover::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Mover {
    Table,
    Id,
    Name,
    WeightLimit,
    QuestState,
    MissionsCompleted,
    CreatedAt,
    UpdatedAt,
}
