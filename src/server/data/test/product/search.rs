use super::*;

/// Tests search matches name, description and brand regardless of case.
///
/// Expected: Ok with every product containing the term
#[tokio::test]
async fn matches_name_description_and_brand() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let by_name = factory::product::ProductFactory::new(db)
        .name("Hydraulic Pump")
        .build()
        .await?;
    let by_description = factory::product::ProductFactory::new(db)
        .name("Seal Kit")
        .description("Fits most HYDRAULIC cylinders")
        .build()
        .await?;
    let by_brand = factory::product::ProductFactory::new(db)
        .name("Filter")
        .brand("HydraulicWorks")
        .build()
        .await?;
    factory::product::ProductFactory::new(db)
        .name("Bucket Tooth")
        .build()
        .await?;

    let results = ProductRepository::new(db).search("hydraulic").await?;
    let mut ids: Vec<i32> = results.iter().map(|p| p.id).collect();
    ids.sort();

    assert_eq!(ids, vec![by_name.id, by_description.id, by_brand.id]);

    Ok(())
}

/// Tests wildcard characters in the query are matched literally.
///
/// Expected: Ok with only the product containing a literal percent sign
#[tokio::test]
async fn treats_wildcards_literally() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let literal = factory::product::ProductFactory::new(db)
        .name("Grease 100% synthetic")
        .build()
        .await?;
    factory::product::ProductFactory::new(db)
        .name("Grease standard")
        .build()
        .await?;

    let results = ProductRepository::new(db).search("%").await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, literal.id);

    Ok(())
}
