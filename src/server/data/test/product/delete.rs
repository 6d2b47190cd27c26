use super::*;
use crate::server::data::order::OrderRepository;

/// Tests deleting a product that appears in a past order.
///
/// Expected: Ok(true), the order keeps its line with the captured price and no product
#[tokio::test]
async fn keeps_order_lines_of_deleted_product() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, product, order) = factory::helpers::create_order_with_dependencies(db).await?;

    let deleted = ProductRepository::new(db).delete(product.id).await?;
    let order = OrderRepository::new(db).find_by_id(order.id).await?.unwrap();

    assert!(deleted);
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].product_id, None);
    assert_eq!(order.items[0].unit_price, product.price);

    Ok(())
}

/// Tests deleting an unknown product.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_product() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!ProductRepository::new(db).delete(404).await?);

    Ok(())
}
