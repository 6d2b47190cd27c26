use super::*;

/// Tests admin user successfully passes admin permission check.
///
/// Expected: Ok(User) with admin role
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET);

    let admin = User::from_entity(factory::user::create_admin(db).await?)?;
    let headers = headers_for(&tokens, &admin);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    assert!(result.is_admin());

    Ok(())
}

/// Tests non-admin user is denied admin permission.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_customer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET);

    let customer = User::from_entity(factory::user::create_user(db).await?)?;
    let headers = headers_for(&tokens, &customer);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == customer.id
    ));

    Ok(())
}

/// Tests the stored role wins over the role in the token.
///
/// A token issued while the user was an admin must stop granting admin access once
/// the stored role changes.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn uses_current_role_not_token_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET);

    let mut user = User::from_entity(factory::user::create_user(db).await?)?;
    user.role = crate::server::model::user::Role::Admin;
    let headers = headers_for(&tokens, &user);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
