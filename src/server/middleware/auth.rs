//! Bearer-token authentication guard.
//!
//! Handlers construct an `AuthGuard` from the request headers and call `require`
//! with the permissions the route needs. The guard verifies the token and then
//! reloads the user, so deleted accounts and role changes take effect immediately.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::auth::token::TokenService,
};

pub enum Permission {
    /// Caller must be an admin.
    Admin,
    /// Caller must be the given user or an admin.
    SelfOrAdmin(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Authenticates the caller and checks every listed permission.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AuthError::MissingToken)` - No bearer token in the request
    /// - `Err(AuthError::InvalidToken)` - Token is malformed, forged or expired
    /// - `Err(AuthError::UserNotInDatabase)` - The token's user no longer exists
    /// - `Err(AuthError::AccessDenied)` - A permission is not satisfied
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let token = bearer_token(self.headers).ok_or(AuthError::MissingToken)?;
        let claims = self.tokens.verify(token)?;

        let Some(user) = UserRepository::new(self.db).find_by_id(claims.sub).await? else {
            return Err(AuthError::UserNotInDatabase(claims.sub).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "Route requires admin permissions".to_string(),
                        )
                        .into());
                    }
                }
                Permission::SelfOrAdmin(owner_id) => {
                    if user.id != *owner_id && !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!("Resource belongs to user {}", owner_id),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}

/// Checks that `user` may act on a resource owned by `owner_id`.
///
/// Used after loading a resource whose owner is only known from the database.
pub fn ensure_owner_or_admin(user: &User, owner_id: i32) -> Result<(), AppError> {
    if user.id == owner_id || user.is_admin() {
        return Ok(());
    }

    Err(AuthError::AccessDenied(user.id, format!("Resource belongs to user {}", owner_id)).into())
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
