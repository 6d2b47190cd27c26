use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::{
    model::maintenance::MaintenanceRequestDto,
    server::{error::AppError, util::parse::parse_stored},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaintenanceStatus {
    Pending,
    InProgress,
    Resolved,
}

impl MaintenanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
        }
    }
}

impl FromStr for MaintenanceStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            _ => Err(()),
        }
    }
}

/// Service request for a customer's machine.
#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceRequest {
    pub id: i32,
    pub user_id: i32,
    pub equipment_id: String,
    pub issue: String,
    pub status: MaintenanceStatus,
    pub created_at: DateTime<Utc>,
}

impl MaintenanceRequest {
    pub fn from_entity(entity: entity::maintenance_request::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            equipment_id: entity.equipment_id,
            issue: entity.issue,
            status: parse_stored("maintenance_request.status", entity.status)?,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> MaintenanceRequestDto {
        MaintenanceRequestDto {
            id: self.id,
            user_id: self.user_id,
            equipment_id: self.equipment_id,
            issue: self.issue,
            status: self.status.as_str().to_string(),
            created_at: self.created_at,
        }
    }
}
