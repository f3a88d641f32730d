use chrono::{DateTime, Utc};
use entity::quest_state::QuestState;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::item::{Item, ItemDto};

/// Request body for creating a mover.
///
/// Fields are optional so that a missing field produces a 400 with a
/// descriptive message at the boundary instead of a deserialization failure.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMoverDto {
    pub name: Option<String>,
    pub weight_limit: Option<f64>,
}

/// Request body for loading an item onto a mover.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoadItemDto {
    pub item_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoverDto {
    pub id: i32,
    pub name: String,
    pub weight_limit: f64,
    #[schema(value_type = String, example = "resting")]
    pub quest_state: QuestState,
    pub items: Vec<ItemDto>,
    pub missions_completed: i32,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub updated_at: DateTime<Utc>,
}

/// Fleet mover with its loaded items resolved.
///
/// The `items` list holds the full item records in load order, resolved by
/// the service after fetching the mover row. Weights are therefore always
/// available for capacity checks without further queries.
#[derive(Debug, Clone, PartialEq)]
pub struct Mover {
    /// Unique identifier for the mover.
    pub id: i32,
    /// Display name of the mover.
    pub name: String,
    /// Maximum combined weight of loaded items.
    pub weight_limit: f64,
    /// Current lifecycle state.
    pub quest_state: QuestState,
    /// Loaded items in load order.
    pub items: Vec<Item>,
    /// Number of missions this mover has completed.
    pub missions_completed: i32,
    /// Timestamp when the mover was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp when the mover was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Mover {
    /// Builds a mover domain model from its entity row and resolved items.
    pub fn from_entity(entity: entity::mover::Model, items: Vec<Item>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            weight_limit: entity.weight_limit,
            quest_state: entity.quest_state,
            items,
            missions_completed: entity.missions_completed,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Combined weight of the currently loaded items.
    pub fn current_weight(&self) -> f64 {
        self.items.iter().map(|item| item.weight).sum()
    }

    /// Converts the domain model into its wire representation.
    pub fn into_dto(self) -> MoverDto {
        MoverDto {
            id: self.id,
            name: self.name,
            weight_limit: self.weight_limit,
            quest_state: self.quest_state,
            items: self.items.into_iter().map(Item::into_dto).collect(),
            missions_completed: self.missions_completed,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating a new mover.
#[derive(Debug, Clone)]
pub struct CreateMoverParams {
    /// Display name of the mover.
    pub name: String,
    /// Maximum combined weight of loaded items.
    pub weight_limit: f64,
}
