use chrono::Utc;
use entity::quest_state::QuestState;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Repository for the append-only activity log.
///
/// Only writes are exposed; no operation in the system reads the log back.
pub struct ActivityLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends one log entry recording a mover state transition.
    ///
    /// # Arguments
    /// - `mover_id` - ID of the mover that transitioned
    /// - `action` - The state the mover transitioned into
    ///
    /// # Returns
    /// - `Ok(Model)` - The created log entry with generated ID and timestamp
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create(
        &self,
        mover_id: i32,
        action: QuestState,
    ) -> Result<entity::activity_log::Model, DbErr> {
        entity::activity_log::ActiveModel {
            mover_id: ActiveValue::Set(mover_id),
            action: ActiveValue::Set(action),
            timestamp: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
