//! Offer factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an offer for a product running between the given dates.
pub async fn create_offer(
    db: &DatabaseConnection,
    product_id: i32,
    discount: f64,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
) -> Result<entity::offer::Model, DbErr> {
    entity::offer::ActiveModel {
        product_id: ActiveValue::Set(product_id),
        discount: ActiveValue::Set(discount),
        description: ActiveValue::Set(format!("{}% off", discount)),
        start_date: ActiveValue::Set(start_date),
        end_date: ActiveValue::Set(end_date),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
