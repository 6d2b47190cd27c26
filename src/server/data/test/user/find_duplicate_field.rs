use super::*;

/// Tests each unique field is reported when it collides.
///
/// Expected: Ok(Some(field)) naming the first colliding field
#[tokio::test]
async fn names_colliding_field() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("a@example.com")
        .username("alpha")
        .phone("+966500000100")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert_eq!(
        repo.find_duplicate_field(&user.email, "fresh", "+966500000999")
            .await?,
        Some("email")
    );
    assert_eq!(
        repo.find_duplicate_field("b@example.com", &user.username, "+966500000999")
            .await?,
        Some("username")
    );
    assert_eq!(
        repo.find_duplicate_field("b@example.com", "fresh", &user.phone)
            .await?,
        Some("phone")
    );

    Ok(())
}

/// Tests no collision is reported for unused values.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_free_values() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;

    let result = UserRepository::new(db)
        .find_duplicate_field("new@example.com", "newbie", "+966599999999")
        .await?;

    assert_eq!(result, None);

    Ok(())
}
