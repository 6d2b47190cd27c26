use super::*;

/// Tests trending products are ordered by score and limited.
///
/// Expected: Ok with the two highest scores
#[tokio::test]
async fn returns_highest_scores() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for score in [5, 50, 0, 20] {
        factory::product::ProductFactory::new(db)
            .trending_score(score)
            .build()
            .await?;
    }

    let trending = ProductRepository::new(db).top_trending(2).await?;

    assert_eq!(
        trending.iter().map(|p| p.trending_score).collect::<Vec<_>>(),
        vec![50, 20]
    );

    Ok(())
}

/// Tests featured listing only includes flagged products.
///
/// Expected: Ok with the featured product only
#[tokio::test]
async fn featured_excludes_unflagged() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let featured = factory::product::ProductFactory::new(db)
        .featured(true)
        .build()
        .await?;
    factory::product::create_product(db).await?;

    let products = ProductRepository::new(db).featured(5).await?;

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, featured.id);

    Ok(())
}
