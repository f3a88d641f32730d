use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating an item.
///
/// Fields are optional so that a missing field produces a 400 with a
/// descriptive message at the boundary instead of a deserialization failure.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemDto {
    pub name: Option<String>,
    pub weight: Option<f64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub id: i32,
    pub name: String,
    pub weight: f64,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub updated_at: DateTime<Utc>,
}

/// Cargo item with a weight consumed against a mover's capacity.
///
/// Items are immutable after creation; there is no update or delete
/// operation anywhere in the system.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Unique identifier for the item.
    pub id: i32,
    /// Display name of the item.
    pub name: String,
    /// Weight counted against a mover's weight limit when loaded.
    pub weight: f64,
    /// Timestamp when the item was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp when the item was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Converts an entity model to an item domain model at the repository boundary.
    pub fn from_entity(entity: entity::item::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            weight: entity.weight,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the domain model into its wire representation.
    pub fn into_dto(self) -> ItemDto {
        ItemDto {
            id: self.id,
            name: self.name,
            weight: self.weight,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating a new item.
#[derive(Debug, Clone)]
pub struct CreateItemParams {
    /// Display name of the item.
    pub name: String,
    /// Weight counted against a mover's weight limit when loaded.
    pub weight: f64,
}
