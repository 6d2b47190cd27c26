use super::*;

/// Tests brand and category filters combine.
///
/// Expected: Ok with only products matching both filters
#[tokio::test]
async fn filters_by_brand_and_category() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let wanted = factory::product::ProductFactory::new(db)
        .brand("Komatsu")
        .category("engine")
        .build()
        .await?;
    factory::product::ProductFactory::new(db)
        .brand("Komatsu")
        .category("hydraulics")
        .build()
        .await?;
    factory::product::ProductFactory::new(db)
        .brand("Volvo")
        .category("engine")
        .build()
        .await?;

    let filter = ProductFilter {
        brand: Some("Komatsu".to_string()),
        category: Some("engine".to_string()),
    };
    let (products, total) = ProductRepository::new(db)
        .get_paginated(&filter, 0, 10)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(products[0].id, wanted.id);

    Ok(())
}

/// Tests an empty filter pages through every product.
///
/// Expected: Ok with the requested page size and the full total
#[tokio::test]
async fn pages_without_filter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::product::create_product(db).await?;
    }

    let (products, total) = ProductRepository::new(db)
        .get_paginated(&ProductFilter::default(), 0, 2)
        .await?;

    assert_eq!(total, 3);
    assert_eq!(products.len(), 2);

    Ok(())
}
