use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer` header.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// Bearer token failed signature or expiry validation.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Bearer token is invalid: {0}")]
    InvalidToken(String),

    /// Login with an unknown email or a wrong password.
    ///
    /// Both cases share one response so that callers cannot probe for accounts.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The token is valid but its user has since been deleted.
    ///
    /// Results in a 404 Not Found response.
    #[error("User {0} referenced by token does not exist")]
    UserNotInDatabase(i32),

    /// The user is authenticated but lacks the required permission.
    ///
    /// Results in a 403 Forbidden response; the reason is only logged.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Admin registration attempted with a wrong or expired bootstrap code.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Admin code is invalid or expired")]
    InvalidAdminCode,
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `InvalidCredentials` → 401 Unauthorized
/// - `UserNotInDatabase` → 404 Not Found with "User not found"
/// - `AccessDenied` / `InvalidAdminCode` → 403 Forbidden
///
/// All errors are logged at debug level while keeping client-facing messages generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "Authentication required"),
            Self::InvalidToken(_) => (StatusCode::UNAUTHORIZED, "Invalid or expired token"),
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::UserNotInDatabase(_) => (StatusCode::NOT_FOUND, "User not found"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Access denied"),
            Self::InvalidAdminCode => (StatusCode::FORBIDDEN, "Invalid admin code"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
