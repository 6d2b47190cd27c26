use super::*;

/// Tests feedback without a product is accepted.
///
/// Expected: Ok(Feedback) with no product
#[tokio::test]
async fn creates_general_feedback() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let feedback = FeedbackRepository::new(db)
        .create(CreateFeedbackParams {
            user_id: user.id,
            product_id: None,
            rating: 4,
            comment: "Fast delivery".to_string(),
        })
        .await?;

    assert_eq!(feedback.user_id, user.id);
    assert_eq!(feedback.product_id, None);
    assert_eq!(feedback.rating, 4);

    Ok(())
}
