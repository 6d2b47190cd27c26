use super::*;

/// Tests deleting an order removes it together with its items.
///
/// Expected: Ok(true), then the order is gone and a second delete returns false
#[tokio::test]
async fn deletes_order_and_items() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, order) = factory::helpers::create_order_with_dependencies(db).await?;

    let repo = OrderRepository::new(db);

    assert!(repo.delete(order.id).await?);
    assert!(repo.find_by_id(order.id).await?.is_none());
    assert!(!repo.delete(order.id).await?);

    Ok(())
}
