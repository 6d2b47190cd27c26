use super::*;

/// Tests status and reference updates are persisted.
///
/// Expected: Ok(Some(Order)) with the new status and stored references
#[tokio::test]
async fn updates_status_and_references() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, order) = factory::helpers::create_order_with_dependencies(db).await?;

    let repo = OrderRepository::new(db);
    let updated = repo
        .update_status(order.id, OrderStatus::Shipped)
        .await?
        .unwrap();
    assert!(repo.set_payment_reference(order.id, "cs_test_1".to_string()).await?);
    assert!(repo.set_tracking_number(order.id, "SMSA123".to_string()).await?);
    let stored = repo.find_by_id(order.id).await?.unwrap();

    assert_eq!(updated.status, OrderStatus::Shipped);
    assert_eq!(stored.payment_reference.as_deref(), Some("cs_test_1"));
    assert_eq!(stored.tracking_number.as_deref(), Some("SMSA123"));

    Ok(())
}

/// Tests updating a missing order.
///
/// Expected: Ok(None) and Ok(false)
#[tokio::test]
async fn reports_missing_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);

    assert!(repo
        .update_status(404, OrderStatus::Delivered)
        .await?
        .is_none());
    assert!(!repo.set_tracking_number(404, "x".to_string()).await?);

    Ok(())
}
