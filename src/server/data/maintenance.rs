use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::maintenance::{MaintenanceRequest, MaintenanceStatus},
};

pub struct MaintenanceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaintenanceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Files a new request with status `pending`.
    pub async fn create(
        &self,
        user_id: i32,
        equipment_id: String,
        issue: String,
    ) -> Result<MaintenanceRequest, AppError> {
        let entity = entity::maintenance_request::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            equipment_id: ActiveValue::Set(equipment_id),
            issue: ActiveValue::Set(issue),
            status: ActiveValue::Set(MaintenanceStatus::Pending.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        MaintenanceRequest::from_entity(entity)
    }

    /// Every request, newest first.
    pub async fn get_all(&self) -> Result<Vec<MaintenanceRequest>, AppError> {
        entity::prelude::MaintenanceRequest::find()
            .order_by_desc(entity::maintenance_request::Column::CreatedAt)
            .order_by_desc(entity::maintenance_request::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(MaintenanceRequest::from_entity)
            .collect()
    }

    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<MaintenanceRequest>, AppError> {
        entity::prelude::MaintenanceRequest::find()
            .filter(entity::maintenance_request::Column::UserId.eq(user_id))
            .order_by_desc(entity::maintenance_request::Column::CreatedAt)
            .order_by_desc(entity::maintenance_request::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(MaintenanceRequest::from_entity)
            .collect()
    }

    /// Sets the status of a request.
    ///
    /// # Returns
    /// - `Ok(Some(MaintenanceRequest))` - The updated request
    /// - `Ok(None)` - No request with that ID
    pub async fn update_status(
        &self,
        id: i32,
        status: MaintenanceStatus,
    ) -> Result<Option<MaintenanceRequest>, AppError> {
        let Some(existing) = entity::prelude::MaintenanceRequest::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::maintenance_request::ActiveModel = existing.into();
        active.status = ActiveValue::Set(status.as_str().to_string());
        let updated = active.update(self.db).await?;

        Ok(Some(MaintenanceRequest::from_entity(updated)?))
    }
}
