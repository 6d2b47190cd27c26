use super::*;

/// Tests recording a purchase time on an existing subscription.
///
/// Expected: last_purchase set to the given time
#[tokio::test]
async fn records_purchase_time() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::subscription::create_subscription(db, user.id).await?;
    let at = Utc::now();

    let repo = SubscriptionRepository::new(db);
    repo.touch_last_purchase(user.id, at).await?;
    let stored = repo.find_by_user(user.id).await?.unwrap();

    assert_eq!(
        stored.last_purchase.map(|t| t.timestamp()),
        Some(at.timestamp())
    );

    Ok(())
}

/// Tests users without a subscription are left alone.
///
/// Expected: Ok(()) and still no subscription
#[tokio::test]
async fn ignores_user_without_subscription() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = SubscriptionRepository::new(db);
    repo.touch_last_purchase(user.id, Utc::now()).await?;

    assert!(repo.find_by_user(user.id).await?.is_none());

    Ok(())
}
