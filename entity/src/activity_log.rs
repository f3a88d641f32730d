use sea_orm::entity::prelude::*;

use crate::quest_state::QuestState;

/// Append-only audit record of a mover state transition.
///
/// One row is written per successful load, start-mission, and end-mission.
/// No API operation reads these rows back.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "activity_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub mover_id: i32,
    pub action: QuestState,
    pub timestamp: DateTimeUtc,
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
}

impl Related<super::mover::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mover.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
