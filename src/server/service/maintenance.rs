//! Equipment maintenance requests.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::maintenance::MaintenanceRepository,
    error::AppError,
    model::maintenance::{MaintenanceRequest, MaintenanceStatus},
    util::validate::require_non_blank,
};

pub struct MaintenanceService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> MaintenanceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Files a request; both fields must be non-blank.
    pub async fn submit(
        &self,
        user_id: i32,
        equipment_id: &str,
        issue: &str,
    ) -> Result<MaintenanceRequest, AppError> {
        let equipment_id = require_non_blank("equipment_id", equipment_id)?;
        let issue = require_non_blank("issue", issue)?;

        let request = MaintenanceRepository::new(self.db)
            .create(user_id, equipment_id, issue)
            .await?;
        tracing::info!(
            "User {} filed maintenance request {} for {}",
            user_id,
            request.id,
            request.equipment_id
        );

        Ok(request)
    }

    pub async fn get_all(&self) -> Result<Vec<MaintenanceRequest>, AppError> {
        MaintenanceRepository::new(self.db).get_all().await
    }

    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<MaintenanceRequest>, AppError> {
        MaintenanceRepository::new(self.db).get_by_user(user_id).await
    }

    pub async fn update_status(
        &self,
        id: i32,
        status: MaintenanceStatus,
    ) -> Result<Option<MaintenanceRequest>, AppError> {
        MaintenanceRepository::new(self.db)
            .update_status(id, status)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn files_pending_request_and_updates_status() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::user::create_user(db).await?;
        let other = factory::user::create_user(db).await?;
        factory::maintenance::create_maintenance_request(db, other.id).await?;
        let service = MaintenanceService::new(db);

        let request = service
            .submit(user.id, " WL-950 ", "Boom cylinder leaking")
            .await?;
        let updated = service
            .update_status(request.id, MaintenanceStatus::InProgress)
            .await?
            .unwrap();

        assert_eq!(request.status, MaintenanceStatus::Pending);
        assert_eq!(request.equipment_id, "WL-950");
        assert_eq!(updated.status, MaintenanceStatus::InProgress);
        assert_eq!(service.get_for_user(user.id).await?.len(), 1);
        assert_eq!(service.get_all().await?.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn rejects_blank_issue() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::user::create_user(db).await?;

        let result = MaintenanceService::new(db)
            .submit(user.id, "EX-200", "   ")
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }
}
