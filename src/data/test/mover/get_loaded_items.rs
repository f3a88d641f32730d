use super::*;

/// Tests resolving loaded items in load order.
///
/// Verifies that items come back in the order they were attached,
/// regardless of their IDs.
///
/// Expected: Ok with items in position order
#[tokio::test]
async fn returns_items_in_load_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mover_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mover = factory::mover::create_mover(db).await?;
    let first = factory::item::create_item(db).await?;
    let second = factory::item::create_item(db).await?;

    // Attach in reverse id order to make sure position wins
    factory::helpers::load_item(db, mover.id, second.id, 0).await?;
    factory::helpers::load_item(db, mover.id, first.id, 1).await?;

    let repo = MoverRepository::new(db);
    let items = repo.get_loaded_items(mover.id).await?;

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, second.id);
    assert_eq!(items[1].id, first.id);

    Ok(())
}

/// Tests resolving items for a mover with nothing loaded.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_unloaded_mover() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mover_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mover = factory::mover::create_mover(db).await?;

    let repo = MoverRepository::new(db);
    let items = repo.get_loaded_items(mover.id).await?;

    assert!(items.is_empty());

    Ok(())
}

/// Tests that items loaded on other movers are not included.
///
/// Expected: Ok with only this mover's items
#[tokio::test]
async fn ignores_other_movers_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mover_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mover = factory::mover::create_mover(db).await?;
    let other = factory::mover::create_mover(db).await?;
    let mine = factory::item::create_item(db).await?;
    let theirs = factory::item::create_item(db).await?;

    factory::helpers::load_item(db, mover.id, mine.id, 0).await?;
    factory::helpers::load_item(db, other.id, theirs.id, 0).await?;

    let repo = MoverRepository::new(db);
    let items = repo.get_loaded_items(mover.id).await?;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, mine.id);

    Ok(())
}
