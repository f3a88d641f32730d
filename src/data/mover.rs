use chrono::Utc;
use entity::quest_state::QuestState;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::model::{item::Item, mover::CreateMoverParams};

/// Repository providing database operations for movers and their loaded items.
///
/// Loaded items live in the `mover_item` join table; this repository exposes
/// the join-row operations (`get_loaded_items`, `append_item`,
/// `complete_mission`) alongside plain mover CRUD. None of the multi-step
/// operations run inside a transaction; callers perform unsynchronized
/// read-modify-write sequences by design.
pub struct MoverRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MoverRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new mover in the resting state with no completed missions.
    ///
    /// # Arguments
    /// - `params` - Create parameters containing name and weight limit
    ///
    /// # Returns
    /// - `Ok(Model)` - The created mover entity with generated ID
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create(&self, params: CreateMoverParams) -> Result<entity::mover::Model, DbErr> {
        let now = Utc::now();

        entity::mover::ActiveModel {
            name: ActiveValue::Set(params.name),
            weight_limit: ActiveValue::Set(params.weight_limit),
            quest_state: ActiveValue::Set(QuestState::Resting),
            missions_completed: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a mover row by ID, returning `None` if it does not exist.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::mover::Model>, DbErr> {
        entity::prelude::Mover::find_by_id(id).one(self.db).await
    }

    /// Gets all mover rows in store iteration order (id ascending).
    pub async fn get_all(&self) -> Result<Vec<entity::mover::Model>, DbErr> {
        entity::prelude::Mover::find()
            .order_by_asc(entity::mover::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets all mover rows sorted by completed missions descending.
    ///
    /// Ties keep the store's iteration order; no secondary sort key is
    /// applied.
    pub async fn get_all_by_missions_desc(&self) -> Result<Vec<entity::mover::Model>, DbErr> {
        entity::prelude::Mover::find()
            .order_by_desc(entity::mover::Column::MissionsCompleted)
            .all(self.db)
            .await
    }

    /// Resolves the items loaded on a mover, in load order.
    ///
    /// Fetches the join rows ordered by position, then the referenced items
    /// in one batch query, and reassembles them in position order.
    ///
    /// # Arguments
    /// - `mover_id` - ID of the mover whose items to resolve
    ///
    /// # Returns
    /// - `Ok(Vec<Item>)` - Loaded items in load order (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_loaded_items(&self, mover_id: i32) -> Result<Vec<Item>, DbErr> {
        let links = entity::prelude::MoverItem::find()
            .filter(entity::mover_item::Column::MoverId.eq(mover_id))
            .order_by_asc(entity::mover_item::Column::Position)
            .all(self.db)
            .await?;

        if links.is_empty() {
            return Ok(Vec::new());
        }

        let item_ids: Vec<i32> = links.iter().map(|link| link.item_id).collect();
        let items_map: HashMap<i32, entity::item::Model> = entity::prelude::Item::find()
            .filter(entity::item::Column::Id.is_in(item_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|item| (item.id, item))
            .collect();

        let items = links
            .into_iter()
            .filter_map(|link| items_map.get(&link.item_id).cloned())
            .map(Item::from_entity)
            .collect();

        Ok(items)
    }

    /// Appends an item reference to a mover's loaded list.
    ///
    /// # Arguments
    /// - `mover_id` - ID of the mover being loaded
    /// - `item_id` - ID of the item to load
    /// - `position` - Load-order position of the new reference
    ///
    /// # Returns
    /// - `Ok(())` - Join row inserted
    /// - `Err(DbErr)` - Database error, including a unique constraint
    ///   violation if the item is already loaded on this mover
    pub async fn append_item(
        &self,
        mover_id: i32,
        item_id: i32,
        position: i32,
    ) -> Result<(), DbErr> {
        entity::mover_item::ActiveModel {
            mover_id: ActiveValue::Set(mover_id),
            item_id: ActiveValue::Set(item_id),
            position: ActiveValue::Set(position),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Sets a mover's quest state and bumps its update timestamp.
    ///
    /// # Arguments
    /// - `mover_id` - ID of the mover to update
    /// - `state` - New quest state
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated mover entity
    /// - `Err(DbErr::RecordNotFound)` - No mover exists with the specified ID
    /// - `Err(DbErr)` - Other database error during update operation
    pub async fn set_quest_state(
        &self,
        mover_id: i32,
        state: QuestState,
    ) -> Result<entity::mover::Model, DbErr> {
        let mover = entity::prelude::Mover::find_by_id(mover_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Mover with id {} not found",
                mover_id
            )))?;

        let mut active_model: entity::mover::ActiveModel = mover.into();
        active_model.quest_state = ActiveValue::Set(state);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    /// Finishes a mover's mission: unloads everything, returns it to resting,
    /// and increments its completed-mission counter by one.
    ///
    /// Only the item references are removed; the items themselves stay in the
    /// item store.
    ///
    /// # Arguments
    /// - `mover_id` - ID of the mover ending its mission
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated mover entity
    /// - `Err(DbErr::RecordNotFound)` - No mover exists with the specified ID
    /// - `Err(DbErr)` - Other database error
    pub async fn complete_mission(&self, mover_id: i32) -> Result<entity::mover::Model, DbErr> {
        let mover = entity::prelude::Mover::find_by_id(mover_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Mover with id {} not found",
                mover_id
            )))?;

        entity::prelude::MoverItem::delete_many()
            .filter(entity::mover_item::Column::MoverId.eq(mover_id))
            .exec(self.db)
            .await?;

        let missions_completed = mover.missions_completed;

        let mut active_model: entity::mover::ActiveModel = mover.into();
        active_model.quest_state = ActiveValue::Set(QuestState::Resting);
        active_model.missions_completed = ActiveValue::Set(missions_completed + 1);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }
}
