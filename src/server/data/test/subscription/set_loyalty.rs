use super::*;

/// Tests toggling loyalty.
///
/// Expected: Ok(Some) with the flag set, Ok(None) for a user without subscription
#[tokio::test]
async fn sets_loyalty_flag() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let without = factory::user::create_user(db).await?;
    factory::subscription::create_subscription(db, user.id).await?;

    let repo = SubscriptionRepository::new(db);
    let updated = repo.set_loyalty(user.id, true).await?.unwrap();

    assert!(updated.is_loyal);
    assert!(repo.set_loyalty(without.id, true).await?.is_none());

    Ok(())
}
