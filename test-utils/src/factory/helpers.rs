//! Shared helpers for test data factories.

use std::sync::atomic::{AtomicI32, Ordering};

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::{item::ItemFactory, mover::MoverFactory};

static NEXT_ID: AtomicI32 = AtomicI32::new(1);

/// Returns a process-wide unique id for generating distinct default names.
///
/// Factories use this to avoid name collisions when multiple entities are
/// created with default values in the same test run.
pub fn next_id() -> i32 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Creates a mover in the `loading` state with `item_count` items loaded.
///
/// Each item is created with the default weight and attached to the mover
/// via a join row in load order. The mover is created with the default
/// weight limit, so keep `item_count` small enough to fit.
///
/// # Returns
/// - `Ok((mover, items))` - The created mover and its loaded items
/// - `Err(DbErr)` - Database error during setup
pub async fn create_loaded_mover(
    db: &DatabaseConnection,
    item_count: usize,
) -> Result<(entity::mover::Model, Vec<entity::item::Model>), DbErr> {
    let mover = MoverFactory::new(db)
        .quest_state(entity::quest_state::QuestState::Loading)
        .build()
        .await?;

    let mut items = Vec::with_capacity(item_count);

    for position in 0..item_count {
        let item = ItemFactory::new(db).build().await?;

        load_item(db, mover.id, item.id, position as i32).await?;

        items.push(item);
    }

    Ok((mover, items))
}

/// Attaches an item to a mover at the given load position.
pub async fn load_item(
    db: &DatabaseConnection,
    mover_id: i32,
    item_id: i32,
    position: i32,
) -> Result<entity::mover_item::Model, DbErr> {
    entity::mover_item::ActiveModel {
        mover_id: ActiveValue::Set(mover_id),
        item_id: ActiveValue::Set(item_id),
        position: ActiveValue::Set(position),
    }
    .insert(db)
    .await
}

/// Records an activity log row for a mover state transition.
pub async fn log_activity(
    db: &DatabaseConnection,
    mover_id: i32,
    action: entity::quest_state::QuestState,
) -> Result<entity::activity_log::Model, DbErr> {
    entity::activity_log::ActiveModel {
        id: ActiveValue::NotSet,
        mover_id: ActiveValue::Set(mover_id),
        action: ActiveValue::Set(action),
        timestamp: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
