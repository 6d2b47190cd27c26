use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        offer::{CreateOfferDto, OfferDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::offer::CreateOfferParams,
        service::offer::OfferService,
        state::AppState,
    },
};

/// Tag for grouping offer endpoints in OpenAPI documentation
pub static OFFER_TAG: &str = "offer";

/// Create a discount offer on a product.
///
/// # Access Control
/// - `Admin` - Only admins can create offers
///
/// # Returns
/// - `201 Created` - The new offer
/// - `400 Bad Request` - Discount outside (0, 100] or end date before start date
/// - `404 Not Found` - Product does not exist
#[utoipa::path(
    post,
    path = "/api/offers",
    tag = OFFER_TAG,
    request_body = CreateOfferDto,
    responses(
        (status = 201, description = "Offer created", body = OfferDto),
        (status = 400, description = "Invalid offer data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_offer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateOfferDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let offer = OfferService::new(&state.db)
        .create(CreateOfferParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(offer.into_dto())))
}

/// Offers whose end date has not passed.
#[utoipa::path(
    get,
    path = "/api/offers",
    tag = OFFER_TAG,
    responses(
        (status = 200, description = "Current offers", body = Vec<OfferDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_offers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let offers = OfferService::new(&state.db).active().await?;
    let offers_dto: Vec<_> = offers.into_iter().map(|o| o.into_dto()).collect();

    Ok((StatusCode::OK, Json(offers_dto)))
}
