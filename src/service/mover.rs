use entity::quest_state::QuestState;
use sea_orm::DatabaseConnection;

use crate::{
    data::{activity_log::ActivityLogRepository, item::ItemRepository, mover::MoverRepository},
    error::{quest::QuestError, AppError},
    model::mover::{CreateMoverParams, Mover},
};

/// Service owning the mover quest state machine and loading rules.
///
/// Every returned mover has its loaded items resolved, so weights are
/// available to callers without further queries. Each operation is a single
/// unsynchronized read-modify-write sequence; two concurrent loads against
/// the same mover may both pass the capacity check before either write
/// commits, and that race window is part of the contract.
pub struct MoverService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MoverService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new mover.
    ///
    /// New movers start resting with no items and zero completed missions.
    /// Name and weight limit validation happens at the HTTP boundary.
    pub async fn create(&self, params: CreateMoverParams) -> Result<Mover, AppError> {
        let repo = MoverRepository::new(self.db);

        let mover = repo.create(params).await?;

        Ok(Mover::from_entity(mover, Vec::new()))
    }

    /// Gets all movers with their items resolved, in store iteration order.
    pub async fn get_all(&self) -> Result<Vec<Mover>, AppError> {
        let repo = MoverRepository::new(self.db);

        let movers = repo.get_all().await?;

        self.resolve_items(movers).await
    }

    /// Gets a mover by ID with its items resolved.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Mover>, AppError> {
        let repo = MoverRepository::new(self.db);

        let Some(mover) = repo.get_by_id(id).await? else {
            return Ok(None);
        };

        let items = repo.get_loaded_items(id).await?;

        Ok(Some(Mover::from_entity(mover, items)))
    }

    /// Loads an item onto a mover.
    ///
    /// Enforces, in order: the mover exists, it is not on a mission, the item
    /// exists, the item is not already loaded, and the item's weight fits
    /// within the remaining capacity. On success the item reference is
    /// appended, the mover enters (or stays in) the loading state, and a
    /// loading entry is written to the activity log.
    ///
    /// # Arguments
    /// - `mover_id` - ID of the mover being loaded
    /// - `item_id` - ID of the item to load
    ///
    /// # Returns
    /// - `Ok(Mover)` - The updated mover with items resolved
    /// - `Err(QuestError::MoverNotFound)` - No mover with this ID
    /// - `Err(QuestError::LoadWhileOnMission)` - Mover is on a mission
    /// - `Err(QuestError::ItemNotFound)` - No item with this ID
    /// - `Err(QuestError::AlreadyLoaded)` - Item already on this mover
    /// - `Err(QuestError::CapacityExceeded)` - Load would exceed the limit
    pub async fn load_item(&self, mover_id: i32, item_id: i32) -> Result<Mover, AppError> {
        let mover_repo = MoverRepository::new(self.db);
        let item_repo = ItemRepository::new(self.db);
        let log_repo = ActivityLogRepository::new(self.db);

        let mover = mover_repo
            .get_by_id(mover_id)
            .await?
            .ok_or(QuestError::MoverNotFound)?;

        if mover.quest_state == QuestState::OnMission {
            return Err(QuestError::LoadWhileOnMission.into());
        }

        let item = item_repo
            .get_by_id(item_id)
            .await?
            .ok_or(QuestError::ItemNotFound)?;

        let loaded = mover_repo.get_loaded_items(mover_id).await?;

        if loaded.iter().any(|loaded_item| loaded_item.id == item_id) {
            return Err(QuestError::AlreadyLoaded.into());
        }

        let current: f64 = loaded.iter().map(|loaded_item| loaded_item.weight).sum();
        if current + item.weight > mover.weight_limit {
            return Err(QuestError::CapacityExceeded {
                current,
                item_weight: item.weight,
                limit: mover.weight_limit,
            }
            .into());
        }

        mover_repo
            .append_item(mover_id, item_id, loaded.len() as i32)
            .await?;
        mover_repo
            .set_quest_state(mover_id, QuestState::Loading)
            .await?;

        log_repo.create(mover_id, QuestState::Loading).await?;

        self.get_by_id(mover_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Mover not found after loading".to_string()))
    }

    /// Starts a mission for a mover.
    ///
    /// Rejected if the mover is already on a mission or has nothing loaded.
    /// On success the mover enters the on-mission state and an on-mission
    /// entry is written to the activity log.
    ///
    /// # Arguments
    /// - `mover_id` - ID of the mover starting its mission
    ///
    /// # Returns
    /// - `Ok(Mover)` - The updated mover with items resolved
    /// - `Err(QuestError::MoverNotFound)` - No mover with this ID
    /// - `Err(QuestError::AlreadyOnMission)` - Mover is already on a mission
    /// - `Err(QuestError::NoItemsLoaded)` - Mover has no items loaded
    pub async fn start_mission(&self, mover_id: i32) -> Result<Mover, AppError> {
        let mover_repo = MoverRepository::new(self.db);
        let log_repo = ActivityLogRepository::new(self.db);

        let mover = mover_repo
            .get_by_id(mover_id)
            .await?
            .ok_or(QuestError::MoverNotFound)?;

        if mover.quest_state == QuestState::OnMission {
            return Err(QuestError::AlreadyOnMission.into());
        }

        let items = mover_repo.get_loaded_items(mover_id).await?;
        if items.is_empty() {
            return Err(QuestError::NoItemsLoaded.into());
        }

        let mover = mover_repo
            .set_quest_state(mover_id, QuestState::OnMission)
            .await?;

        log_repo.create(mover_id, QuestState::OnMission).await?;

        Ok(Mover::from_entity(mover, items))
    }

    /// Ends a mover's mission.
    ///
    /// Rejected unless the mover is on a mission. On success all item
    /// references are removed (the items themselves survive in the item
    /// store), the mover returns to resting, its completed-mission counter
    /// increments by exactly one, and a resting entry is written to the
    /// activity log.
    ///
    /// # Arguments
    /// - `mover_id` - ID of the mover ending its mission
    ///
    /// # Returns
    /// - `Ok(Mover)` - The updated mover with an empty item list
    /// - `Err(QuestError::MoverNotFound)` - No mover with this ID
    /// - `Err(QuestError::NotOnMission)` - Mover is not on a mission
    pub async fn end_mission(&self, mover_id: i32) -> Result<Mover, AppError> {
        let mover_repo = MoverRepository::new(self.db);
        let log_repo = ActivityLogRepository::new(self.db);

        let mover = mover_repo
            .get_by_id(mover_id)
            .await?
            .ok_or(QuestError::MoverNotFound)?;

        if mover.quest_state != QuestState::OnMission {
            return Err(QuestError::NotOnMission.into());
        }

        let mover = mover_repo.complete_mission(mover_id).await?;

        log_repo.create(mover_id, QuestState::Resting).await?;

        Ok(Mover::from_entity(mover, Vec::new()))
    }

    /// Gets all movers sorted by completed missions descending, items
    /// resolved. Tie-break order among equal counts is unspecified.
    pub async fn leaderboard(&self) -> Result<Vec<Mover>, AppError> {
        let repo = MoverRepository::new(self.db);

        let movers = repo.get_all_by_missions_desc().await?;

        self.resolve_items(movers).await
    }

    /// Resolves loaded items for a batch of mover rows.
    async fn resolve_items(
        &self,
        movers: Vec<entity::mover::Model>,
    ) -> Result<Vec<Mover>, AppError> {
        let repo = MoverRepository::new(self.db);

        let mut results = Vec::with_capacity(movers.len());
        for mover in movers {
            let items = repo.get_loaded_items(mover.id).await?;
            results.push(Mover::from_entity(mover, items));
        }

        Ok(results)
    }
}
