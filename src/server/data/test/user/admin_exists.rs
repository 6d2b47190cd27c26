use super::*;

/// Tests admin detection only counts admin accounts.
///
/// Expected: false with customers only, true once an admin exists
#[tokio::test]
async fn detects_admin_accounts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    factory::user::create_user(db).await?;
    assert!(!repo.admin_exists().await?);

    factory::user::create_admin(db).await?;
    assert!(repo.admin_exists().await?);

    Ok(())
}
