use sea_orm::entity::prelude::*;

/// Cargo item with a weight consumed against a mover's capacity.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub weight: f64,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::mover_item::Entity")]
    MoverItem,
}

impl Related<super::mover_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MoverItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
