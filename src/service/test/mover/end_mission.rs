use super::*;

/// Tests ending a mission.
///
/// Verifies that the mover returns to resting with an empty load, its
/// mission counter increments by exactly one, and a resting entry is
/// recorded in the activity log.
///
/// Expected: Ok with resting, unloaded mover and counter + 1
#[tokio::test]
async fn ends_mission_and_unloads() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mover_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (mover, items) = factory::helpers::create_loaded_mover(db, 2).await?;

    let service = MoverService::new(db);
    service.start_mission(mover.id).await.unwrap();
    let result = service.end_mission(mover.id).await;

    assert!(result.is_ok());
    let updated = result.unwrap();
    assert_eq!(updated.quest_state, QuestState::Resting);
    assert!(updated.items.is_empty());
    assert_eq!(updated.missions_completed, 1);

    // Unloading removes references only, never the items themselves
    for item in items {
        let stored = entity::prelude::Item::find_by_id(item.id).one(db).await?;
        assert!(stored.is_some());
    }

    let resting_entries = entity::prelude::ActivityLog::find()
        .filter(entity::activity_log::Column::MoverId.eq(mover.id))
        .filter(entity::activity_log::Column::Action.eq(QuestState::Resting))
        .all(db)
        .await?;
    assert_eq!(resting_entries.len(), 1);

    Ok(())
}

/// Tests ending a mission for a non-existent mover.
///
/// Expected: Err(QuestError::MoverNotFound)
#[tokio::test]
async fn fails_for_nonexistent_mover() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mover_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MoverService::new(db);
    let result = service.end_mission(999999).await;

    assert!(matches!(
        result,
        Err(AppError::QuestErr(QuestError::MoverNotFound))
    ));

    Ok(())
}

/// Tests ending a mission for a resting mover.
///
/// Expected: Err(QuestError::NotOnMission)
#[tokio::test]
async fn fails_while_resting() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mover_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mover = factory::mover::create_mover(db).await?;

    let service = MoverService::new(db);
    let result = service.end_mission(mover.id).await;

    assert!(matches!(
        result,
        Err(AppError::QuestErr(QuestError::NotOnMission))
    ));

    Ok(())
}

/// Tests ending a mission for a mover still loading.
///
/// Loading is not on-mission, so ending is rejected and the load stays.
///
/// Expected: Err(QuestError::NotOnMission) with items untouched
#[tokio::test]
async fn fails_while_loading() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mover_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (mover, _) = factory::helpers::create_loaded_mover(db, 1).await?;

    let service = MoverService::new(db);
    let result = service.end_mission(mover.id).await;

    assert!(matches!(
        result,
        Err(AppError::QuestErr(QuestError::NotOnMission))
    ));

    let mover = service.get_by_id(mover.id).await.unwrap().unwrap();
    assert_eq!(mover.items.len(), 1);

    Ok(())
}

/// Tests that each completed mission increments the counter by one.
///
/// Expected: Ok with counter equal to the number of completed missions
#[tokio::test]
async fn increments_counter_per_mission() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mover_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mover = factory::mover::create_mover(db).await?;
    let item = factory::item::create_item_with_weight(db, 1.0).await?;

    let service = MoverService::new(db);
    for expected in 1..=3 {
        service.load_item(mover.id, item.id).await.unwrap();
        service.start_mission(mover.id).await.unwrap();
        let updated = service.end_mission(mover.id).await.unwrap();

        assert_eq!(updated.missions_completed, expected);
    }

    Ok(())
}
