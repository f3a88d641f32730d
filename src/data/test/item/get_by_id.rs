use super::*;

/// Tests retrieving an item by ID.
///
/// Expected: Ok(Some(item)) with matching fields
#[tokio::test]
async fn returns_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mover_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::item::create_item_with_weight(db, 3.25).await?;

    let repo = ItemRepository::new(db);
    let result = repo.get_by_id(created.id).await?;

    assert!(result.is_some());
    let item = result.unwrap();
    assert_eq!(item.id, created.id);
    assert_eq!(item.name, created.name);
    assert_eq!(item.weight, 3.25);

    Ok(())
}

/// Tests retrieving a non-existent item.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mover_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ItemRepository::new(db);
    let result = repo.get_by_id(999999).await?;

    assert!(result.is_none());

    Ok(())
}
