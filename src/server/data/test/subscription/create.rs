use super::*;

/// Tests a subscription starts non-loyal without purchases.
///
/// Expected: Ok(Subscription) with the chosen type
#[tokio::test]
async fn creates_subscription() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let subscription = SubscriptionRepository::new(db)
        .create(user.id, SubscriptionType::Premium)
        .await?;

    assert_eq!(subscription.user_id, user.id);
    assert_eq!(subscription.subscription_type, SubscriptionType::Premium);
    assert!(!subscription.is_loyal);
    assert!(subscription.last_purchase.is_none());

    Ok(())
}

/// Tests the unique user column rejects a second subscription.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn rejects_second_subscription() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::subscription::create_subscription(db, user.id).await?;

    let result = SubscriptionRepository::new(db)
        .create(user.id, SubscriptionType::Basic)
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
