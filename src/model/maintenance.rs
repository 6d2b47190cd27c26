use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateMaintenanceRequestDto {
    pub equipment_id: String,
    pub issue: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MaintenanceRequestDto {
    pub id: i32,
    pub user_id: i32,
    pub equipment_id: String,
    pub issue: String,
    /// `pending`, `in_progress` or `resolved`
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateMaintenanceStatusDto {
    pub status: String,
}
