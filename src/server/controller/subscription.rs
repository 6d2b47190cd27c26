use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        subscription::{CreateSubscriptionDto, SubscriptionDto, UpdateLoyaltyDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::subscription::SubscriptionType,
        service::subscription::SubscriptionService,
        state::AppState,
        util::parse::parse_request,
    },
};

/// Tag for grouping subscription endpoints in OpenAPI documentation
pub static SUBSCRIPTION_TAG: &str = "subscription";

/// Subscribe the authenticated user.
///
/// # Returns
/// - `201 Created` - The new subscription
/// - `400 Bad Request` - Type is not `basic` or `premium`
/// - `409 Conflict` - The user already has a subscription
#[utoipa::path(
    post,
    path = "/api/subscriptions",
    tag = SUBSCRIPTION_TAG,
    request_body = CreateSubscriptionDto,
    responses(
        (status = 201, description = "Subscription created", body = SubscriptionDto),
        (status = 400, description = "Unknown subscription type", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 409, description = "User already subscribed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_subscription(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateSubscriptionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let subscription_type: SubscriptionType =
        parse_request("subscription_type", &payload.subscription_type)?;
    let subscription = SubscriptionService::new(&state.db)
        .subscribe(user.id, subscription_type)
        .await?;

    Ok((StatusCode::CREATED, Json(subscription.into_dto())))
}

/// # Access Control
/// - `SelfOrAdmin` - The subscriber, or an admin
#[utoipa::path(
    get,
    path = "/api/subscriptions/{user_id}",
    tag = SUBSCRIPTION_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The user's subscription", body = SubscriptionDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "User has no subscription", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_subscription(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::SelfOrAdmin(user_id)])
        .await?;

    let Some(subscription) = SubscriptionService::new(&state.db)
        .get_for_user(user_id)
        .await?
    else {
        return Err(AppError::NotFound("Subscription not found".to_string()));
    };

    Ok((StatusCode::OK, Json(subscription.into_dto())))
}

/// Mark or unmark a subscriber as loyal.
///
/// # Access Control
/// - `Admin` - Only admins can change loyalty status
#[utoipa::path(
    put,
    path = "/api/subscriptions/{user_id}",
    tag = SUBSCRIPTION_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateLoyaltyDto,
    responses(
        (status = 200, description = "Subscription updated", body = SubscriptionDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User has no subscription", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_loyalty(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
    Json(payload): Json<UpdateLoyaltyDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let Some(subscription) = SubscriptionService::new(&state.db)
        .set_loyalty(user_id, payload.is_loyal)
        .await?
    else {
        return Err(AppError::NotFound("Subscription not found".to_string()));
    };

    Ok((StatusCode::OK, Json(subscription.into_dto())))
}
