use super::*;

/// Tests a full quest cycle end to end.
///
/// Loads two items onto a fresh mover, departs, verifies loading is
/// rejected mid-mission, then returns and checks the final state.
///
/// Expected: resting mover, empty load, one completed mission
#[tokio::test]
async fn runs_full_quest_cycle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mover_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mover = factory::mover::create_mover_with_limit(db, 100.0).await?;
    let light = factory::item::create_item_with_weight(db, 5.0).await?;
    let heavy = factory::item::create_item_with_weight(db, 15.0).await?;
    let extra = factory::item::create_item_with_weight(db, 1.0).await?;

    let service = MoverService::new(db);

    let loaded = service.load_item(mover.id, light.id).await.unwrap();
    assert_eq!(loaded.quest_state, QuestState::Loading);

    let loaded = service.load_item(mover.id, heavy.id).await.unwrap();
    assert_eq!(loaded.items.len(), 2);
    assert_eq!(loaded.current_weight(), 20.0);

    let departed = service.start_mission(mover.id).await.unwrap();
    assert_eq!(departed.quest_state, QuestState::OnMission);

    // No loading mid-mission
    let rejected = service.load_item(mover.id, extra.id).await;
    assert!(matches!(
        rejected,
        Err(AppError::QuestErr(QuestError::LoadWhileOnMission))
    ));

    let returned = service.end_mission(mover.id).await.unwrap();
    assert_eq!(returned.quest_state, QuestState::Resting);
    assert!(returned.items.is_empty());
    assert_eq!(returned.missions_completed, 1);

    // One log entry per transition: loading, loading, on-mission, resting
    let log_entries = entity::prelude::ActivityLog::find()
        .filter(entity::activity_log::Column::MoverId.eq(mover.id))
        .all(db)
        .await?;
    assert_eq!(log_entries.len(), 4);

    Ok(())
}

/// Tests that a mover is immediately reusable after a quest.
///
/// Expected: Ok loading the same item again after ending a mission
#[tokio::test]
async fn mover_is_reusable_after_quest() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mover_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mover = factory::mover::create_mover(db).await?;
    let item = factory::item::create_item_with_weight(db, 10.0).await?;

    let service = MoverService::new(db);
    service.load_item(mover.id, item.id).await.unwrap();
    service.start_mission(mover.id).await.unwrap();
    service.end_mission(mover.id).await.unwrap();

    // The reference was cleared, so the same item loads again
    let reloaded = service.load_item(mover.id, item.id).await.unwrap();
    assert_eq!(reloaded.quest_state, QuestState::Loading);
    assert_eq!(reloaded.items.len(), 1);

    Ok(())
}
