use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        delivery::{DeliveryDto, DeliveryRequestDto},
    },
    server::{
        error::AppError,
        middleware::auth::{ensure_owner_or_admin, AuthGuard},
        model::order::DeliveryMethod,
        service::{
            delivery::{CarrierEndpoints, DeliveryService},
            order::OrderService,
        },
        state::AppState,
        util::parse::parse_request,
    },
};

/// Tag for grouping delivery endpoints in OpenAPI documentation
pub static DELIVERY_TAG: &str = "delivery";

/// Book delivery for an order.
///
/// `smsa` and `aramex` pass the order to the carrier and return its JSON response,
/// storing the tracking number when the carrier supplies one. `site_pickup` answers
/// with the tracking number `site_pickup` without contacting a carrier.
///
/// # Access Control
/// - `SelfOrAdmin` - The customer who placed the order, or an admin
///
/// # Returns
/// - `200 OK` - Booking result
/// - `400 Bad Request` - Unknown delivery option
/// - `404 Not Found` - No order with that ID
/// - `500 Internal Server Error` - Carrier endpoint not configured
/// - `502 Bad Gateway` - Carrier rejected the booking
#[utoipa::path(
    post,
    path = "/api/delivery",
    tag = DELIVERY_TAG,
    request_body = DeliveryRequestDto,
    responses(
        (status = 200, description = "Delivery booked", body = DeliveryDto),
        (status = 400, description = "Unknown delivery option", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Carrier not configured", body = ErrorDto),
        (status = 502, description = "Carrier request failed", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn book_delivery(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<DeliveryRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let method: DeliveryMethod = parse_request("delivery_option", &payload.delivery_option)?;

    let Some(order) = OrderService::new(&state.db)
        .get_by_id(payload.order_id)
        .await?
    else {
        return Err(AppError::NotFound("Order not found".to_string()));
    };
    ensure_owner_or_admin(&user, order.user_id)?;

    let carriers = CarrierEndpoints {
        smsa: state.config.smsa_api_url.as_deref(),
        aramex: state.config.aramex_api_url.as_deref(),
    };
    let shipment = DeliveryService::new(&state.db, &state.http_client, carriers)
        .book(&order, method)
        .await?;

    Ok((StatusCode::OK, Json(shipment.into_dto())))
}
