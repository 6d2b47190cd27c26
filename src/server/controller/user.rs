use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        order::OrderDto,
        user::{
            LoginDto, LoginResponseDto, PaginatedUsersDto, RegisterAdminDto, RegisterUserDto,
            SendOtpDto, UpdateProfileDto, UserDto, VerifyOtpDto,
        },
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{RegisterUserParams, UpdateProfileParams},
        service::{sms::SmsService, user::UserService},
        state::AppState,
        util::validate::require_non_blank,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a customer or company account.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Account details; `role` defaults to `customer`
///
/// # Returns
/// - `201 Created` - The new account
/// - `400 Bad Request` - Blank field or unsupported role
/// - `409 Conflict` - Email, username or phone already registered
#[utoipa::path(
    post,
    path = "/api/users/register",
    tag = USER_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 409, description = "Email, username or phone already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .register(RegisterUserParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Register an admin account using the bootstrap code printed at startup.
///
/// The code is single use and expires 15 minutes after it was generated. It is only
/// consumed once the account is created, so a rejected request can be retried.
#[utoipa::path(
    post,
    path = "/api/users/register/admin",
    tag = USER_TAG,
    request_body = RegisterAdminDto,
    responses(
        (status = 201, description = "Admin account created", body = UserDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 403, description = "Admin code invalid or expired", body = ErrorDto),
        (status = 409, description = "Email, username or phone already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_admin(
    State(state): State<AppState>,
    Json(payload): Json<RegisterAdminDto>,
) -> Result<impl IntoResponse, AppError> {
    let (params, admin_code) = RegisterUserParams::from_admin_dto(payload);
    let user = UserService::new(&state.db)
        .register_admin(params, &admin_code, &state.admin_code_service)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Exchange email and password for a bearer token.
///
/// # Returns
/// - `200 OK` - Token valid for 7 days and the user it belongs to
/// - `400 Bad Request` - Email or password missing
/// - `401 Unauthorized` - Unknown email or wrong password
#[utoipa::path(
    post,
    path = "/api/users/login",
    tag = USER_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = LoginResponseDto),
        (status = 400, description = "Email or password missing", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let (token, user) = UserService::new(&state.db)
        .login(&payload.email, &payload.password, &state.tokens)
        .await?;

    Ok((
        StatusCode::OK,
        Json(LoginResponseDto {
            token,
            user: user.into_dto(),
        }),
    ))
}

/// Get all users with pagination.
///
/// # Access Control
/// - `Admin` - Only admins can list users
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `params` - Pagination parameters (page and entries)
///
/// # Returns
/// - `200 OK` - Paginated list of users
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, at most 100)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved users", body = PaginatedUsersDto),
        (status = 400, description = "Page out of range", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_all_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let (page, per_page) = params.window()?;
    let users = UserService::new(&state.db)
        .get_all_users(page, per_page)
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

/// Get the authenticated user's profile.
#[utoipa::path(
    get,
    path = "/api/users/profile",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "User no longer exists", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update the authenticated user's profile.
///
/// Customers may change personal details, companies their company details. Fields
/// the caller's role may not edit are ignored, absent fields keep their value.
///
/// # Returns
/// - `200 OK` - The updated profile
/// - `401 Unauthorized` - Missing or invalid token
/// - `409 Conflict` - Phone number belongs to another account
#[utoipa::path(
    put,
    path = "/api/users/profile",
    tag = USER_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "User no longer exists", body = ErrorDto),
        (status = 409, description = "Phone number already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let updated = UserService::new(&state.db)
        .update_profile(&user, UpdateProfileParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(updated.into_dto())))
}

/// Delete a user account.
///
/// # Access Control
/// - `SelfOrAdmin` - Users can delete their own account, admins any account
///
/// # Returns
/// - `204 No Content` - Account deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is neither the user nor an admin
/// - `404 Not Found` - No user with that ID
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::SelfOrAdmin(id)])
        .await?;

    if !UserService::new(&state.db).delete_user(id).await? {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Orders placed by the authenticated user, newest first.
#[utoipa::path(
    get,
    path = "/api/users/orders",
    tag = USER_TAG,
    responses(
        (status = 200, description = "The user's orders", body = Vec<OrderDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_user_orders(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let orders = UserService::new(&state.db).get_orders(user.id).await?;
    let orders_dto: Vec<_> = orders.into_iter().map(|o| o.into_dto()).collect();

    Ok((StatusCode::OK, Json(orders_dto)))
}

/// Send a 6-digit verification code to a phone number.
///
/// The code expires after 5 minutes. Without an SMS gateway configured the code
/// is written to the server log instead.
///
/// # Returns
/// - `200 OK` - Code dispatched
/// - `400 Bad Request` - Phone number missing
/// - `502 Bad Gateway` - SMS gateway rejected the message
#[utoipa::path(
    post,
    path = "/api/users/send-otp",
    tag = USER_TAG,
    request_body = SendOtpDto,
    responses(
        (status = 200, description = "Code sent", body = MessageDto),
        (status = 400, description = "Phone number missing", body = ErrorDto),
        (status = 502, description = "SMS gateway failure", body = ErrorDto)
    ),
)]
pub async fn send_otp(
    State(state): State<AppState>,
    Json(payload): Json<SendOtpDto>,
) -> Result<impl IntoResponse, AppError> {
    let phone = require_non_blank("phone", &payload.phone)?;

    let code = state.otp_service.issue(&phone).await;
    SmsService::new(&state.http_client, state.config.sms_gateway_url.as_deref())
        .send(&phone, &format!("Your verification code is {}", code))
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Verification code sent".to_string(),
        }),
    ))
}

/// Check a verification code. Each code can be used once.
#[utoipa::path(
    post,
    path = "/api/users/verify-otp",
    tag = USER_TAG,
    request_body = VerifyOtpDto,
    responses(
        (status = 200, description = "Phone number verified", body = MessageDto),
        (status = 400, description = "Code wrong, used or expired", body = ErrorDto)
    ),
)]
pub async fn verify_otp(
    State(state): State<AppState>,
    Json(payload): Json<VerifyOtpDto>,
) -> Result<impl IntoResponse, AppError> {
    let phone = require_non_blank("phone", &payload.phone)?;

    if !state.otp_service.verify(&phone, payload.code.trim()).await {
        return Err(AppError::BadRequest(
            "Invalid or expired verification code".to_string(),
        ));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Phone number verified".to_string(),
        }),
    ))
}
