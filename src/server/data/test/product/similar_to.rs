use super::*;

/// Tests similar products share category and brand and exclude the product itself.
///
/// Expected: Ok with matching products, highest trending first
#[tokio::test]
async fn finds_same_category_and_brand() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let base = factory::product::ProductFactory::new(db)
        .brand("Volvo")
        .category("filters")
        .build()
        .await?;
    let cold = factory::product::ProductFactory::new(db)
        .brand("Volvo")
        .category("filters")
        .trending_score(1)
        .build()
        .await?;
    let hot = factory::product::ProductFactory::new(db)
        .brand("Volvo")
        .category("filters")
        .trending_score(9)
        .build()
        .await?;
    factory::product::ProductFactory::new(db)
        .brand("Volvo")
        .category("engine")
        .build()
        .await?;
    factory::product::ProductFactory::new(db)
        .brand("Komatsu")
        .category("filters")
        .build()
        .await?;

    let repo = ProductRepository::new(db);
    let product = repo.find_by_id(base.id).await?.unwrap();
    let similar = repo.similar_to(&product).await?;

    assert_eq!(
        similar.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![hot.id, cold.id]
    );

    Ok(())
}
