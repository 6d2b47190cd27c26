use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        feedback::{CreateFeedbackDto, FeedbackDto},
    },
    server::{
        controller::param::FeedbackQueryParam,
        error::AppError,
        middleware::auth::AuthGuard,
        model::feedback::{CreateFeedbackParams, FeedbackFilter},
        service::feedback::FeedbackService,
        state::AppState,
    },
};

/// Tag for grouping feedback endpoints in OpenAPI documentation
pub static FEEDBACK_TAG: &str = "feedback";

/// Submit a rating, optionally about a specific product.
///
/// # Returns
/// - `201 Created` - The stored feedback
/// - `400 Bad Request` - Rating outside 1 to 5
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Referenced product does not exist
#[utoipa::path(
    post,
    path = "/api/feedback",
    tag = FEEDBACK_TAG,
    request_body = CreateFeedbackDto,
    responses(
        (status = 201, description = "Feedback stored", body = FeedbackDto),
        (status = 400, description = "Rating out of range", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_feedback(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateFeedbackDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let feedback = FeedbackService::new(&state.db)
        .submit(CreateFeedbackParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(feedback.into_dto())))
}

/// Public feedback listing, newest first. Rating bounds are inclusive.
#[utoipa::path(
    get,
    path = "/api/feedback",
    tag = FEEDBACK_TAG,
    params(
        ("min_rating" = Option<i32>, Query, description = "Lowest rating to include"),
        ("max_rating" = Option<i32>, Query, description = "Highest rating to include"),
        ("product_id" = Option<i32>, Query, description = "Only feedback about this product")
    ),
    responses(
        (status = 200, description = "Matching feedback", body = Vec<FeedbackDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_feedback(
    State(state): State<AppState>,
    Query(params): Query<FeedbackQueryParam>,
) -> Result<impl IntoResponse, AppError> {
    let filter = FeedbackFilter {
        min_rating: params.min_rating,
        max_rating: params.max_rating,
        product_id: params.product_id,
    };

    let feedback = FeedbackService::new(&state.db).list(filter).await?;
    let feedback_dto: Vec<_> = feedback.into_iter().map(|f| f.into_dto()).collect();

    Ok((StatusCode::OK, Json(feedback_dto)))
}
