use super::*;

/// Tests reserving stock decrements it and raises the trending score.
///
/// Expected: Ok(true) with stock and score adjusted by the quantity
#[tokio::test]
async fn reserves_when_stock_unchanged() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::ProductFactory::new(db)
        .stock(10)
        .trending_score(2)
        .build()
        .await?;

    let repo = ProductRepository::new(db);
    let reserved = repo.reserve_stock(product.id, 3, 10).await?;
    let stored = repo.find_by_id(product.id).await?.unwrap();

    assert!(reserved);
    assert_eq!(stored.stock, 7);
    assert_eq!(stored.trending_score, 5);

    Ok(())
}

/// Tests a stale expected stock leaves the row untouched.
///
/// Expected: Ok(false) with stock and score unchanged
#[tokio::test]
async fn skips_when_stock_changed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::ProductFactory::new(db)
        .stock(4)
        .build()
        .await?;

    let repo = ProductRepository::new(db);
    let reserved = repo.reserve_stock(product.id, 1, 5).await?;
    let stored = repo.find_by_id(product.id).await?.unwrap();

    assert!(!reserved);
    assert_eq!(stored.stock, 4);
    assert_eq!(stored.trending_score, 0);

    Ok(())
}
