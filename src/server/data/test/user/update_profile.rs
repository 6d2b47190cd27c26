use super::*;

/// Tests absent fields keep their stored value.
///
/// Expected: Ok(Some(User)) with only the provided fields changed
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .full_name("Before")
        .address(Some("Dammam".to_string()))
        .build()
        .await?;

    let updated = UserRepository::new(db)
        .update_profile(
            user.id,
            UpdateProfileParams {
                full_name: Some("After".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.full_name, "After");
    assert_eq!(updated.address.as_deref(), Some("Dammam"));
    assert_eq!(updated.phone, user.phone);

    Ok(())
}

/// Tests updating a missing user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update_profile(404, UpdateProfileParams::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
