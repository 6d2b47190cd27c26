use super::*;

/// Tests sorting in both directions.
///
/// Expected: Ok with prices ascending or descending
#[tokio::test]
async fn sorts_by_price_both_ways() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for price in [300.0, 100.0, 200.0] {
        factory::product::ProductFactory::new(db)
            .price(price)
            .build()
            .await?;
    }

    let repo = ProductRepository::new(db);
    let asc: Vec<f64> = repo
        .sorted_by_price(PriceOrder::Asc)
        .await?
        .iter()
        .map(|p| p.price)
        .collect();
    let desc: Vec<f64> = repo
        .sorted_by_price(PriceOrder::Desc)
        .await?
        .iter()
        .map(|p| p.price)
        .collect();

    assert_eq!(asc, vec![100.0, 200.0, 300.0]);
    assert_eq!(desc, vec![300.0, 200.0, 100.0]);

    Ok(())
}
