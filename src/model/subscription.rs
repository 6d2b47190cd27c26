use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateSubscriptionDto {
    /// `basic` or `premium`
    pub subscription_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubscriptionDto {
    pub id: i32,
    pub user_id: i32,
    pub subscription_type: String,
    pub is_loyal: bool,
    pub start_date: DateTime<Utc>,
    pub last_purchase: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateLoyaltyDto {
    pub is_loyal: bool,
}
