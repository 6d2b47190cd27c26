use super::*;

/// Tests rating bounds are inclusive and combine with the product filter.
///
/// Expected: Ok with feedback inside the bounds for the product only
#[tokio::test]
async fn filters_by_rating_and_product() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let product = factory::product::create_product(db).await?;
    let other = factory::product::create_product(db).await?;

    factory::feedback::create_feedback(db, user.id, Some(product.id), 1).await?;
    let three = factory::feedback::create_feedback(db, user.id, Some(product.id), 3).await?;
    let four = factory::feedback::create_feedback(db, user.id, Some(product.id), 4).await?;
    factory::feedback::create_feedback(db, user.id, Some(other.id), 4).await?;
    factory::feedback::create_feedback(db, user.id, None, 5).await?;

    let listed = FeedbackRepository::new(db)
        .list(FeedbackFilter {
            min_rating: Some(3),
            max_rating: Some(4),
            product_id: Some(product.id),
        })
        .await?;

    let mut ids: Vec<i32> = listed.iter().map(|f| f.id).collect();
    ids.sort();
    assert_eq!(ids, vec![three.id, four.id]);

    Ok(())
}

/// Tests an empty filter lists everything.
///
/// Expected: Ok with all feedback
#[tokio::test]
async fn lists_everything_without_filter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::feedback::create_feedback(db, user.id, None, 2).await?;
    factory::feedback::create_feedback(db, user.id, None, 5).await?;

    let listed = FeedbackRepository::new(db)
        .list(FeedbackFilter::default())
        .await?;

    assert_eq!(listed.len(), 2);

    Ok(())
}
