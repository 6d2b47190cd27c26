use super::*;

/// Tests users may access their own resources.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET);

    let user = User::from_entity(factory::user::create_user(db).await?)?;
    let headers = headers_for(&tokens, &user);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::SelfOrAdmin(user.id)])
        .await?;

    assert_eq!(result.id, user.id);
    assert!(ensure_owner_or_admin(&result, user.id).is_ok());

    Ok(())
}

/// Tests admins may access other users' resources.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET);

    let owner = factory::user::create_user(db).await?;
    let admin = User::from_entity(factory::user::create_admin(db).await?)?;
    let headers = headers_for(&tokens, &admin);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::SelfOrAdmin(owner.id)])
        .await?;

    assert!(ensure_owner_or_admin(&result, owner.id).is_ok());

    Ok(())
}

/// Tests other customers are denied.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_other_customer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET);

    let owner = factory::user::create_user(db).await?;
    let intruder = User::from_entity(factory::user::create_user(db).await?)?;
    let headers = headers_for(&tokens, &intruder);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::SelfOrAdmin(owner.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert!(ensure_owner_or_admin(&intruder, owner.id).is_err());

    Ok(())
}
