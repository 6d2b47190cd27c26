use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ChatInquiryDto {
    pub question: String,
    pub context: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatAnswerDto {
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChatMessageDto {
    pub id: i32,
    /// `user` or `bot`
    pub sender: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
