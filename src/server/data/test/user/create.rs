use super::*;

/// Tests creating a user stores the hash and applies defaults.
///
/// Expected: Ok(User) with role, zero points and default picture
#[tokio::test]
async fn creates_user_with_defaults() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            full_name: "Sara Ali".to_string(),
            username: "sara".to_string(),
            email: "sara@example.com".to_string(),
            phone: "+966511111111".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            role: Role::Company,
        })
        .await?;

    assert_eq!(user.role, Role::Company);
    assert_eq!(user.points, 0);
    assert_eq!(user.profile_picture, "default.jpg");

    let (stored, hash) = repo
        .find_credentials_by_email("sara@example.com")
        .await?
        .unwrap();
    assert_eq!(stored.id, user.id);
    assert_eq!(hash, "$argon2id$stub");

    Ok(())
}

/// Tests that a second account with the same email violates the unique constraint.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn rejects_duplicate_email_at_database_level() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let result = UserRepository::new(db)
        .create(CreateUserParams {
            full_name: "Other".to_string(),
            username: format!("{}-other", existing.username),
            email: "taken@example.com".to_string(),
            phone: "+966522222222".to_string(),
            password_hash: "hash".to_string(),
            role: Role::Customer,
        })
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
