use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::ErrorDto,
        stats::{InventoryItemDto, MonthlySalesDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::stats::StatsService,
        state::AppState,
    },
};

/// Tag for grouping statistics endpoints in OpenAPI documentation
pub static STATS_TAG: &str = "stats";

/// Sales totals for the current UTC month.
///
/// Cancelled orders are excluded from both the total and the count.
///
/// # Access Control
/// - `Admin` - Only admins can view sales figures
#[utoipa::path(
    get,
    path = "/api/stats/monthly-sales",
    tag = STATS_TAG,
    responses(
        (status = 200, description = "Sales for the current month", body = MonthlySalesDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_monthly_sales(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let sales = StatsService::new(&state.db)
        .monthly_sales(Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(sales.into_dto())))
}

/// # Access Control
/// - `Admin` - Only admins can view inventory levels
#[utoipa::path(
    get,
    path = "/api/stats/inventory",
    tag = STATS_TAG,
    responses(
        (status = 200, description = "Stock level of every product", body = Vec<InventoryItemDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_inventory(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let items = StatsService::new(&state.db).inventory().await?;
    let items_dto: Vec<_> = items.into_iter().map(|i| i.into_dto()).collect();

    Ok((StatusCode::OK, Json(items_dto)))
}
