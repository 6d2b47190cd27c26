use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        chat::{ChatAnswerDto, ChatInquiryDto, ChatMessageDto},
    },
    server::{
        config::Config,
        error::AppError,
        middleware::auth::AuthGuard,
        service::chat::{AssistantEndpoint, ChatService},
        state::AppState,
    },
};

/// Tag for grouping chat endpoints in OpenAPI documentation
pub static CHAT_TAG: &str = "chat";

/// The assistant is only usable when both its URL and key are configured.
fn assistant_endpoint(config: &Config) -> Option<AssistantEndpoint<'_>> {
    match (config.chat_api_url.as_deref(), config.chat_api_key.as_deref()) {
        (Some(url), Some(api_key)) => Some(AssistantEndpoint { url, api_key }),
        _ => None,
    }
}

/// Ask the maintenance assistant a question.
///
/// The question and the answer are both appended to the caller's chat history.
///
/// # Arguments
/// - `state` - Application state containing the database connection and HTTP client
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Question and optional context; context defaults to heavy machinery
///
/// # Returns
/// - `200 OK` - The assistant's answer
/// - `400 Bad Request` - Question is blank
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Assistant not configured
/// - `502 Bad Gateway` - Assistant request failed
#[utoipa::path(
    post,
    path = "/api/chat/inquiry",
    tag = CHAT_TAG,
    request_body = ChatInquiryDto,
    responses(
        (status = 200, description = "Assistant answer", body = ChatAnswerDto),
        (status = 400, description = "Question is blank", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Assistant not configured", body = ErrorDto),
        (status = 502, description = "Assistant request failed", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn ask_assistant(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ChatInquiryDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let answer = ChatService::new(
        &state.db,
        &state.http_client,
        assistant_endpoint(&state.config),
    )
    .ask(user.id, &payload.question, payload.context.as_deref())
    .await?;

    Ok((StatusCode::OK, Json(ChatAnswerDto { answer })))
}

/// The caller's conversation log, oldest first.
#[utoipa::path(
    get,
    path = "/api/chat/history",
    tag = CHAT_TAG,
    responses(
        (status = 200, description = "Chat history", body = Vec<ChatMessageDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_chat_history(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let messages = ChatService::new(&state.db, &state.http_client, None)
        .history(user.id)
        .await?;
    let messages_dto: Vec<_> = messages.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(messages_dto)))
}
