use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{ensure_owner_or_admin, AuthGuard, Permission},
    model::user::User,
    service::auth::token::TokenService,
};
use test_utils::{builder::TestBuilder, factory};

mod require;

const SECRET: &str = "guard-test-secret";

/// Builds request headers carrying a token for the given user.
fn headers_for(tokens: &TokenService, user: &User) -> HeaderMap {
    let token = tokens.issue(user).unwrap();
    bearer_headers(&token)
}

fn bearer_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
