use super::*;

/// Tests creating a new item.
///
/// Verifies that the repository successfully creates an item record with
/// the specified name and weight and assigns a generated ID.
///
/// Expected: Ok with item created
#[tokio::test]
async fn creates_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mover_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ItemRepository::new(db);
    let result = repo
        .create(CreateItemParams {
            name: "Enchanted Sofa".to_string(),
            weight: 12.5,
        })
        .await;

    assert!(result.is_ok());
    let item = result.unwrap();
    assert_eq!(item.name, "Enchanted Sofa");
    assert_eq!(item.weight, 12.5);
    assert!(item.id > 0);

    Ok(())
}

/// Tests that created items get distinct IDs.
///
/// Expected: Ok with two items holding different IDs
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mover_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ItemRepository::new(db);
    let first = repo
        .create(CreateItemParams {
            name: "Crate".to_string(),
            weight: 5.0,
        })
        .await?;
    let second = repo
        .create(CreateItemParams {
            name: "Crate".to_string(),
            weight: 5.0,
        })
        .await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
