//! Maintenance request factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a pending maintenance request for a user.
pub async fn create_maintenance_request(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::maintenance_request::Model, DbErr> {
    entity::maintenance_request::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        equipment_id: ActiveValue::Set("EXC-320".to_string()),
        issue: ActiveValue::Set("Hydraulic pressure drops under load".to_string()),
        status: ActiveValue::Set("pending".to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
