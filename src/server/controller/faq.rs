use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        faq::{CreateFaqDto, FaqDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::faq::FaqService,
        state::AppState,
    },
};

/// Tag for grouping FAQ endpoints in OpenAPI documentation
pub static FAQ_TAG: &str = "faq";

#[utoipa::path(
    get,
    path = "/api/faqs",
    tag = FAQ_TAG,
    responses(
        (status = 200, description = "All questions in the order they were added", body = Vec<FaqDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_faqs(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let faqs = FaqService::new(&state.db).get_all().await?;
    let faqs_dto: Vec<_> = faqs.into_iter().map(|f| f.into_dto()).collect();

    Ok((StatusCode::OK, Json(faqs_dto)))
}

/// Add a question with its answer.
///
/// Entries added by companies and admins are marked `company`, all others `user`.
#[utoipa::path(
    post,
    path = "/api/faqs",
    tag = FAQ_TAG,
    request_body = CreateFaqDto,
    responses(
        (status = 201, description = "Question added", body = FaqDto),
        (status = 400, description = "Question or answer is blank", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_faq(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateFaqDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let faq = FaqService::new(&state.db)
        .add(&user, &payload.question, &payload.answer)
        .await?;

    Ok((StatusCode::CREATED, Json(faq.into_dto())))
}
