use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        maintenance::{
            CreateMaintenanceRequestDto, MaintenanceRequestDto, UpdateMaintenanceStatusDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::maintenance::{MaintenanceRequest, MaintenanceStatus},
        service::maintenance::MaintenanceService,
        state::AppState,
        util::parse::parse_request,
    },
};

/// Tag for grouping maintenance endpoints in OpenAPI documentation
pub static MAINTENANCE_TAG: &str = "maintenance";

fn into_dtos(requests: Vec<MaintenanceRequest>) -> Vec<MaintenanceRequestDto> {
    requests
        .into_iter()
        .map(MaintenanceRequest::into_dto)
        .collect()
}

/// File a maintenance request for a piece of equipment.
///
/// # Returns
/// - `201 Created` - The request with status `pending`
/// - `400 Bad Request` - Equipment ID or issue is blank
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/api/maintenance",
    tag = MAINTENANCE_TAG,
    request_body = CreateMaintenanceRequestDto,
    responses(
        (status = 201, description = "Request filed", body = MaintenanceRequestDto),
        (status = 400, description = "Invalid request data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_maintenance_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateMaintenanceRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let request = MaintenanceService::new(&state.db)
        .submit(user.id, &payload.equipment_id, &payload.issue)
        .await?;

    Ok((StatusCode::CREATED, Json(request.into_dto())))
}

/// # Access Control
/// - `Admin` - Only admins can see every request
#[utoipa::path(
    get,
    path = "/api/maintenance",
    tag = MAINTENANCE_TAG,
    responses(
        (status = 200, description = "All maintenance requests", body = Vec<MaintenanceRequestDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_maintenance_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let requests = MaintenanceService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(into_dtos(requests))))
}

#[utoipa::path(
    get,
    path = "/api/maintenance/mine",
    tag = MAINTENANCE_TAG,
    responses(
        (status = 200, description = "The caller's maintenance requests", body = Vec<MaintenanceRequestDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_my_maintenance_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let requests = MaintenanceService::new(&state.db)
        .get_for_user(user.id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(requests))))
}

/// Move a maintenance request to a new status.
///
/// # Access Control
/// - `Admin` - Only admins can change request status
///
/// # Returns
/// - `200 OK` - The updated request
/// - `400 Bad Request` - Status is not pending, in_progress or resolved
/// - `404 Not Found` - No request with that ID
#[utoipa::path(
    put,
    path = "/api/maintenance/{id}",
    tag = MAINTENANCE_TAG,
    params(
        ("id" = i32, Path, description = "Maintenance request ID")
    ),
    request_body = UpdateMaintenanceStatusDto,
    responses(
        (status = 200, description = "Request updated", body = MaintenanceRequestDto),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_maintenance_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMaintenanceStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let status: MaintenanceStatus = parse_request("status", &payload.status)?;
    let Some(request) = MaintenanceService::new(&state.db)
        .update_status(id, status)
        .await?
    else {
        return Err(AppError::NotFound(
            "Maintenance request not found".to_string(),
        ));
    };

    Ok((StatusCode::OK, Json(request.into_dto())))
}
