use super::*;

/// Tests creating a product keeps images and specifications.
///
/// Expected: Ok(Product) with zero trending score and availability from stock
#[tokio::test]
async fn creates_product() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = ProductRepository::new(db)
        .create(CreateProductParams {
            name: "Track Roller".to_string(),
            description: "Bottom roller for D6 dozers".to_string(),
            price: 1250.0,
            stock: 0,
            category: "undercarriage".to_string(),
            brand: "Caterpillar".to_string(),
            images: vec!["/uploads/roller.png".to_string()],
            specifications: serde_json::json!({ "weight_kg": 48 }),
            is_featured: true,
        })
        .await?;

    assert_eq!(product.trending_score, 0);
    assert!(!product.available());
    assert_eq!(product.images, vec!["/uploads/roller.png".to_string()]);
    assert_eq!(product.specifications["weight_kg"], 48);

    Ok(())
}
