//! Subscription factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a subscription of the given type for a user.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Owner of the subscription
/// - `subscription_type` - `basic` or `premium`
pub async fn create_subscription_of_type(
    db: &DatabaseConnection,
    user_id: i32,
    subscription_type: &str,
) -> Result<entity::subscription::Model, DbErr> {
    entity::subscription::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        subscription_type: ActiveValue::Set(subscription_type.to_string()),
        is_loyal: ActiveValue::Set(false),
        start_date: ActiveValue::Set(Utc::now()),
        last_purchase: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a basic subscription for a user.
pub async fn create_subscription(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::subscription::Model, DbErr> {
    create_subscription_of_type(db, user_id, "basic").await
}
