//! Mover factory for creating test movers.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::quest_state::QuestState;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test movers with customizable fields.
///
/// Provides a builder pattern for creating mover entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::mover::MoverFactory;
/// use entity::quest_state::QuestState;
///
/// let mover = MoverFactory::new(&db)
///     .name("Heavy Hauler")
///     .weight_limit(250.0)
///     .quest_state(QuestState::OnMission)
///     .build()
///     .await?;
/// ```
pub struct MoverFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    weight_limit: f64,
    quest_state: QuestState,
    missions_completed: i32,
}

impl<'a> MoverFactory<'a> {
    /// Creates a new MoverFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Mover {id}"` where id is auto-incremented
    /// - weight_limit: `100.0`
    /// - quest_state: `QuestState::Resting`
    /// - missions_completed: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Mover {}", id),
            weight_limit: 100.0,
            quest_state: QuestState::Resting,
            missions_completed: 0,
        }
    }

    /// Sets the mover name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the mover weight limit.
    pub fn weight_limit(mut self, weight_limit: f64) -> Self {
        self.weight_limit = weight_limit;
        self
    }

    /// Sets the mover quest state.
    pub fn quest_state(mut self, quest_state: QuestState) -> Self {
        self.quest_state = quest_state;
        self
    }

    /// Sets the completed mission count.
    pub fn missions_completed(mut self, missions_completed: i32) -> Self {
        self.missions_completed = missions_completed;
        self
    }

    /// Builds and inserts the mover entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::mover::Model)` - Created mover entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::mover::Model, DbErr> {
        let now = Utc::now();

        entity::mover::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            weight_limit: ActiveValue::Set(self.weight_limit),
            quest_state: ActiveValue::Set(self.quest_state),
            missions_completed: ActiveValue::Set(self.missions_completed),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a mover with default values.
///
/// Shorthand for `MoverFactory::new(db).build().await`.
pub async fn create_mover(db: &DatabaseConnection) -> Result<entity::mover::Model, DbErr> {
    MoverFactory::new(db).build().await
}

/// Creates a mover with a specific weight limit.
pub async fn create_mover_with_limit(
    db: &DatabaseConnection,
    weight_limit: f64,
) -> Result<entity::mover::Model, DbErr> {
    MoverFactory::new(db).weight_limit(weight_limit).build().await
}
