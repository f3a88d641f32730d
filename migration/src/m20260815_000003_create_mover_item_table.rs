use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260815_000001_create_item_table::Item, m20260815_000002_create_mover_table::Mover,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MoverItem::Table)
                    .if_not_exists()
                    .col(integer(MoverItem::MoverId))
                    .col(integer(MoverItem::ItemId))
                    .col(integer(MoverItem::Position))
                    .primary_key(
                        Index::create()
                            .col(MoverItem::MoverId)
                            .col(MoverItem::ItemId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mover_item_mover_id")
                            .from(MoverItem::Table, MoverItem::MoverId)
                            .to(Mover::Table, Mover::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mover_item_item_id")
                            .from(MoverItem::Table, MoverItem::ItemId)
                            .to(Item::Table, Item::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MoverItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MoverItem {
    Table,
    MoverId,
    ItemId,
    Position,
}
