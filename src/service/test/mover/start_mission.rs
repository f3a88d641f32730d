use super::*;

/// Tests starting a mission with items loaded.
///
/// Verifies that the mover enters the on-mission state, keeps its load,
/// and records an on-mission entry in the activity log.
///
/// Expected: Ok with on-mission mover still carrying its items
#[tokio::test]
async fn starts_mission_with_loaded_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mover_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (mover, items) = factory::helpers::create_loaded_mover(db, 2).await?;

    let service = MoverService::new(db);
    let result = service.start_mission(mover.id).await;

    assert!(result.is_ok());
    let updated = result.unwrap();
    assert_eq!(updated.quest_state, QuestState::OnMission);
    assert_eq!(updated.items.len(), items.len());
    assert_eq!(updated.missions_completed, 0);

    let log_entries = entity::prelude::ActivityLog::find()
        .filter(entity::activity_log::Column::MoverId.eq(mover.id))
        .all(db)
        .await?;
    assert_eq!(log_entries.len(), 1);
    assert_eq!(log_entries[0].action, QuestState::OnMission);

    Ok(())
}

/// Tests starting a mission with a single item loaded.
///
/// One item is the minimum load for departure.
///
/// Expected: Ok with on-mission mover
#[tokio::test]
async fn starts_mission_with_one_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mover_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (mover, _) = factory::helpers::create_loaded_mover(db, 1).await?;

    let service = MoverService::new(db);
    let updated = service.start_mission(mover.id).await.unwrap();

    assert_eq!(updated.quest_state, QuestState::OnMission);

    Ok(())
}

/// Tests starting a mission for a non-existent mover.
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
    let result = service.start_mission(999999).await;

    assert!(matches!(
        result,
        Err(AppError::QuestErr(QuestError::MoverNotFound))
    ));

    Ok(())
}

/// Tests starting a mission while one is already underway.
///
/// Expected: Err(QuestError::AlreadyOnMission)
#[tokio::test]
async fn fails_while_already_on_mission() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mover_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (mover, _) = factory::helpers::create_loaded_mover(db, 1).await?;

    let service = MoverService::new(db);
    service.start_mission(mover.id).await.unwrap();
    let result = service.start_mission(mover.id).await;

    assert!(matches!(
        result,
        Err(AppError::QuestErr(QuestError::AlreadyOnMission))
    ));

    Ok(())
}

/// Tests starting a mission with nothing loaded.
///
/// Expected: Err(QuestError::NoItemsLoaded) and mover stays resting
#[tokio::test]
async fn fails_with_no_items_loaded() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mover_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mover = factory::mover::create_mover(db).await?;

    let service = MoverService::new(db);
    let result = service.start_mission(mover.id).await;

    assert!(matches!(
        result,
        Err(AppError::QuestErr(QuestError::NoItemsLoaded))
    ));

    let mover = service.get_by_id(mover.id).await.unwrap().unwrap();
    assert_eq!(mover.quest_state, QuestState::Resting);

    Ok(())
}
