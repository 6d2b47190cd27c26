use super::*;

/// Tests a user's orders come back newest first with their items.
///
/// Expected: Ok with only that user's orders in descending creation order
#[tokio::test]
async fn lists_user_orders_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let product = factory::product::create_product(db).await?;
    let now = Utc::now();

    let older = factory::order::OrderFactory::new(db, user.id)
        .created_at(now - Duration::days(2))
        .build()
        .await?;
    let newer = factory::order::OrderFactory::new(db, user.id)
        .created_at(now)
        .build()
        .await?;
    factory::order::create_order(db, other.id).await?;
    factory::order::create_order_item(db, newer.id, product.id, 3, 50.0).await?;

    let repo = OrderRepository::new(db);
    let orders = repo.get_by_user(user.id).await?;

    assert_eq!(
        orders.iter().map(|o| o.id).collect::<Vec<_>>(),
        vec![newer.id, older.id]
    );
    assert_eq!(orders[0].items.len(), 1);
    assert_eq!(orders[0].items[0].quantity, 3);
    assert!(orders[1].items.is_empty());

    let last = repo.last_by_user(user.id).await?.unwrap();
    assert_eq!(last.id, newer.id);

    Ok(())
}

/// Tests a user without orders has no last order.
///
/// Expected: Ok(None)
#[tokio::test]
async fn no_last_order_for_new_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let last = OrderRepository::new(db).last_by_user(user.id).await?;

    assert!(last.is_none());

    Ok(())
}
