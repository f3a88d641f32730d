use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a mover, stored as a string column.
///
/// Also used as the `action` column of the activity log, since every log entry
/// records the state a mover transitioned into.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "kebab-case")]
pub enum QuestState {
    /// Idle with no mission underway. The initial state.
    #[sea_orm(string_value = "resting")]
    Resting,
    /// At least one item has been loaded; more may follow.
    #[sea_orm(string_value = "loading")]
    Loading,
    /// Mission underway; loading is rejected until the mission ends.
    #[sea_orm(string_value = "on-mission")]
    OnMission,
}
