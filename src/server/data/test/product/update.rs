use super::*;

/// Tests a partial update changes only the given fields.
///
/// Expected: Ok(Some(Product)) with price changed and name kept
#[tokio::test]
async fn applies_partial_update() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::create_product(db).await?;

    let updated = ProductRepository::new(db)
        .update(UpdateProductParams {
            id: product.id,
            price: Some(99.5),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.price, 99.5);
    assert_eq!(updated.name, product.name);

    Ok(())
}

/// Tests update and delete report a missing product.
///
/// Expected: Ok(None) and Ok(false)
#[tokio::test]
async fn reports_missing_product() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    let updated = repo
        .update(UpdateProductParams {
            id: 404,
            ..Default::default()
        })
        .await?;

    assert!(updated.is_none());
    assert!(!repo.delete(404).await?);

    Ok(())
}
