use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateFeedbackDto {
    pub product_id: Option<i32>,
    /// 1 to 5
    pub rating: i32,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FeedbackDto {
    pub id: i32,
    pub user_id: i32,
    pub product_id: Option<i32>,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}
