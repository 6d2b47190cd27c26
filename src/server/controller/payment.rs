use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        payment::{CheckoutSessionDto, CheckoutSessionRequestDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::AuthGuard,
        service::{order::OrderService, payment::PaymentService},
        state::AppState,
    },
};

/// Tag for grouping payment endpoints in OpenAPI documentation
pub static PAYMENT_TAG: &str = "payment";

/// Create a Stripe Checkout session for one of the caller's orders.
///
/// Line items are built from the order's stored items. The session ID is saved as
/// the order's payment reference and the client redirects to the returned URL.
///
/// # Access Control
/// - Only the customer who placed the order
///
/// # Returns
/// - `200 OK` - Session ID and checkout URL
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - The order belongs to another user
/// - `404 Not Found` - No order with that ID
/// - `500 Internal Server Error` - Stripe is not configured
/// - `502 Bad Gateway` - Stripe rejected the request
#[utoipa::path(
    post,
    path = "/api/payments/checkout-session",
    tag = PAYMENT_TAG,
    request_body = CheckoutSessionRequestDto,
    responses(
        (status = 200, description = "Checkout session created", body = CheckoutSessionDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Order belongs to another user", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Stripe not configured", body = ErrorDto),
        (status = 502, description = "Stripe request failed", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_checkout_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CheckoutSessionRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let Some(order) = OrderService::new(&state.db)
        .get_by_id(payload.order_id)
        .await?
    else {
        return Err(AppError::NotFound("Order not found".to_string()));
    };
    if order.user_id != user.id {
        return Err(AuthError::AccessDenied(
            user.id,
            format!("Order {} belongs to user {}", order.id, order.user_id),
        )
        .into());
    }

    let session = PaymentService::new(
        &state.db,
        &state.http_client,
        state.config.stripe_secret_key.as_deref(),
        &state.config.client_url,
    )
    .create_checkout_session(&order)
    .await?;

    Ok((StatusCode::OK, Json(session.into_dto())))
}
