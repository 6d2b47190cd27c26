//! Feedback factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a feedback entry with the given rating.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Author of the feedback
/// - `product_id` - Product the feedback refers to, if any
/// - `rating` - Rating between 1 and 5
pub async fn create_feedback(
    db: &DatabaseConnection,
    user_id: i32,
    product_id: Option<i32>,
    rating: i32,
) -> Result<entity::feedback::Model, DbErr> {
    entity::feedback::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        product_id: ActiveValue::Set(product_id),
        rating: ActiveValue::Set(rating),
        comment: ActiveValue::Set(format!("Rated {} out of 5", rating)),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
