use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::model::item::{CreateItemParams, Item};

/// Repository providing database operations for cargo items.
pub struct ItemRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new item.
    ///
    /// # Arguments
    /// - `params` - Create parameters containing name and weight
    ///
    /// # Returns
    /// - `Ok(Item)` - The created item with generated ID
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create(&self, params: CreateItemParams) -> Result<Item, DbErr> {
        let now = Utc::now();

        let entity = entity::item::ActiveModel {
            name: ActiveValue::Set(params.name),
            weight: ActiveValue::Set(params.weight),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Item::from_entity(entity))
    }

    /// Gets all items in store iteration order (id ascending).
    pub async fn get_all(&self) -> Result<Vec<Item>, DbErr> {
        let entities = entity::prelude::Item::find()
            .order_by_asc(entity::item::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Item::from_entity).collect())
    }

    /// Gets an item by ID, returning `None` if it does not exist.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Item>, DbErr> {
        let entity = entity::prelude::Item::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Item::from_entity))
    }
}
