use super::*;

/// Tests appending an item reference to a mover.
///
/// Expected: Ok with join row created at the given position
#[tokio::test]
async fn appends_item_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mover_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mover = factory::mover::create_mover(db).await?;
    let item = factory::item::create_item(db).await?;

    let repo = MoverRepository::new(db);
    repo.append_item(mover.id, item.id, 0).await?;

    let links = entity::prelude::MoverItem::find()
        .filter(entity::mover_item::Column::MoverId.eq(mover.id))
        .all(db)
        .await?;

    assert_eq!(links.len(), 1);
    assert_eq!(links[0].item_id, item.id);
    assert_eq!(links[0].position, 0);

    Ok(())
}

/// Tests that the same item cannot be attached to one mover twice.
///
/// The composite primary key on the join table rejects the second insert.
///
/// Expected: Err(DbErr) on the duplicate insert
#[tokio::test]
async fn rejects_duplicate_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mover_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mover = factory::mover::create_mover(db).await?;
    let item = factory::item::create_item(db).await?;

    let repo = MoverRepository::new(db);
    repo.append_item(mover.id, item.id, 0).await?;
    let result = repo.append_item(mover.id, item.id, 1).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests that one item can be referenced by two different movers.
///
/// Expected: Ok for both inserts
#[tokio::test]
async fn allows_same_item_on_two_movers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mover_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::mover::create_mover(db).await?;
    let second = factory::mover::create_mover(db).await?;
    let item = factory::item::create_item(db).await?;

    let repo = MoverRepository::new(db);
    repo.append_item(first.id, item.id, 0).await?;
    repo.append_item(second.id, item.id, 0).await?;

    let links = entity::prelude::MoverItem::find()
        .filter(entity::mover_item::Column::ItemId.eq(item.id))
        .all(db)
        .await?;

    assert_eq!(links.len(), 2);

    Ok(())
}
