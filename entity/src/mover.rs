use sea_orm::entity::prelude::*;

use crate::quest_state::QuestState;

/// Fleet mover with a weight capacity, quest state, and mission counter.
///
/// Loaded items are tracked through the `mover_item` join table, not on this
/// row; the service layer resolves them after fetching a mover.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "mover")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub weight_limit: f64,
    pub quest_state: QuestState,
    pub missions_completed: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::mover_item::Entity")]
    MoverItem,
    #[sea_orm(has_many = "super::activity_log::Entity")]
    ActivityLog,
}

impl Related<super::mover_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MoverItem.def()
    }
}

impl Related<super::activity_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ActivityLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
