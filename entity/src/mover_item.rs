use sea_orm::entity::prelude::*;

/// Join row linking a loaded item to a mover.
///
/// `position` records load order so the resolved item list preserves
/// insertion order. The composite primary key rules out loading the same item
/// onto the same mover twice; the same item may still be loaded onto
/// different movers.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mover_item")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub mover_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub item_id: i32,
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::mover::Entity",
        from = "Column::MoverId",
        to = "super::mover::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Mover,
    #[sea_orm(
        belongs_to = "super::item::Entity",
        from = "Column::ItemId",
        to = "super::item::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Item,
}

impl Related<super::mover::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mover.def()
    }
}

impl Related<super::item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Item.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
