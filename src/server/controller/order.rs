use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        order::{CreateOrderDto, OrderDto, PaginatedOrdersDto, UpdateOrderStatusDto},
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{ensure_owner_or_admin, AuthGuard, Permission},
        model::order::{CreateOrderParams, OrderStatus},
        service::order::OrderService,
        state::AppState,
        util::parse::parse_request,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

/// Place an order for the authenticated user.
///
/// Prices are taken from the catalogue and the total is computed server-side. Stock
/// for every line is reserved in one transaction; if any line cannot be covered the
/// whole order is rejected and no stock changes.
///
/// # Arguments
/// - `state` - Application state containing the database connection and trending snapshot
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Order lines with payment and delivery method
///
/// # Returns
/// - `201 Created` - The placed order with its items
/// - `400 Bad Request` - No items, quantity below one, or unknown payment/delivery method
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - A product does not exist
/// - `409 Conflict` - Insufficient stock for a product
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = ORDER_TAG,
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Order placed", body = OrderDto),
        (status = 400, description = "Invalid order data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 409, description = "Insufficient stock", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let params = CreateOrderParams::from_dto(user.id, payload)?;
    let order = OrderService::new(&state.db)
        .create(params, &state.trending)
        .await?;

    Ok((StatusCode::CREATED, Json(order.into_dto())))
}

/// Get all orders with pagination, newest first.
///
/// # Access Control
/// - `Admin` - Only admins can list every order
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = ORDER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, at most 100)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved orders", body = PaginatedOrdersDto),
        (status = 400, description = "Page out of range", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_orders(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let (page, per_page) = params.window()?;
    let orders = OrderService::new(&state.db)
        .get_paginated(page, per_page)
        .await?;

    Ok((StatusCode::OK, Json(orders.into_dto())))
}

/// Get one order.
///
/// # Access Control
/// - `SelfOrAdmin` - The customer who placed the order, or an admin
///
/// # Returns
/// - `200 OK` - The order with its items
/// - `403 Forbidden` - The order belongs to another user
/// - `404 Not Found` - No order with that ID
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "The order", body = OrderDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let Some(order) = OrderService::new(&state.db).get_by_id(id).await? else {
        return Err(AppError::NotFound("Order not found".to_string()));
    };
    ensure_owner_or_admin(&user, order.user_id)?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Orders placed by a user, newest first.
///
/// # Access Control
/// - `SelfOrAdmin` - The user themselves, or an admin
#[utoipa::path(
    get,
    path = "/api/orders/user/{user_id}",
    tag = ORDER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The user's orders", body = Vec<OrderDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_orders_by_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::SelfOrAdmin(user_id)])
        .await?;

    let orders = OrderService::new(&state.db).get_by_user(user_id).await?;
    let orders_dto: Vec<_> = orders.into_iter().map(|o| o.into_dto()).collect();

    Ok((StatusCode::OK, Json(orders_dto)))
}

#[utoipa::path(
    get,
    path = "/api/orders/user/{user_id}/last",
    tag = ORDER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The user's most recent order", body = OrderDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "User has no orders", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_last_order_by_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::SelfOrAdmin(user_id)])
        .await?;

    let Some(order) = OrderService::new(&state.db).last_by_user(user_id).await? else {
        return Err(AppError::NotFound("No orders found for user".to_string()));
    };

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Move an order to a new status.
///
/// # Access Control
/// - `Admin` - Only admins can change order status
///
/// # Returns
/// - `200 OK` - The updated order
/// - `400 Bad Request` - Status is not pending, processing, shipped, delivered or cancelled
/// - `404 Not Found` - No order with that ID
#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    request_body = UpdateOrderStatusDto,
    responses(
        (status = 200, description = "Order updated", body = OrderDto),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateOrderStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let status: OrderStatus = parse_request("status", &payload.status)?;
    let Some(order) = OrderService::new(&state.db)
        .update_status(id, status)
        .await?
    else {
        return Err(AppError::NotFound("Order not found".to_string()));
    };

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// # Access Control
/// - `Admin` - Only admins can delete orders
#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    if !OrderService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Order not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
