use super::*;

/// Tests monthly sales sum orders inside the window and skip cancelled ones.
///
/// Expected: Ok((total, count)) over the non-cancelled orders of March
#[tokio::test]
async fn sums_non_cancelled_orders_in_window() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let start = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap();

    factory::order::OrderFactory::new(db, user.id)
        .total_price(100.0)
        .created_at(start)
        .build()
        .await?;
    factory::order::OrderFactory::new(db, user.id)
        .total_price(250.0)
        .status("delivered")
        .created_at(start + Duration::days(10))
        .build()
        .await?;
    factory::order::OrderFactory::new(db, user.id)
        .total_price(999.0)
        .status("cancelled")
        .created_at(start + Duration::days(11))
        .build()
        .await?;
    factory::order::OrderFactory::new(db, user.id)
        .total_price(500.0)
        .created_at(end)
        .build()
        .await?;

    let (total, count) = OrderRepository::new(db).sales_between(start, end).await?;

    assert_eq!(total, 350.0);
    assert_eq!(count, 2);

    Ok(())
}
