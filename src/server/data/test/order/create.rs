use super::*;

/// Tests an order is stored with its items and starts pending.
///
/// Expected: Ok(Order) with both lines and the given references
#[tokio::test]
async fn creates_order_with_items() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let pump = factory::product::create_product(db).await?;
    let filter = factory::product::create_product(db).await?;
    let placed_at = Utc::now();

    let order = OrderRepository::new(db)
        .create(NewOrder {
            user_id: user.id,
            lines: vec![
                PricedLine {
                    product_id: pump.id,
                    quantity: 2,
                    unit_price: 100.0,
                },
                PricedLine {
                    product_id: filter.id,
                    quantity: 1,
                    unit_price: 40.0,
                },
            ],
            total_price: 240.0,
            payment_method: PaymentMethod::Cash,
            delivery_method: DeliveryMethod::SitePickup,
            payment_reference: Some("cash_on_delivery".to_string()),
            tracking_number: Some("site_pickup".to_string()),
            placed_at,
        })
        .await?;

    assert_eq!(order.user_id, user.id);
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total_price, 240.0);
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.items[0].product_id, Some(pump.id));
    assert_eq!(order.items[0].quantity, 2);
    assert_eq!(order.payment_reference.as_deref(), Some("cash_on_delivery"));
    assert_eq!(order.tracking_number.as_deref(), Some("site_pickup"));

    Ok(())
}
