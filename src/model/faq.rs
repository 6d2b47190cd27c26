use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateFaqDto {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FaqDto {
    pub id: i32,
    pub question: String,
    pub answer: String,
    /// `user` or `company`
    pub added_by: String,
    pub created_at: DateTime<Utc>,
}
