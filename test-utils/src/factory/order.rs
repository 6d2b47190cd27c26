//! Order factories for creating test orders and their line items.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders.
///
/// Defaults to a pending cash order delivered by SMSA with a total of 100.0.
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    total_price: f64,
    payment_method: String,
    delivery_method: String,
    status: String,
    created_at: chrono::DateTime<Utc>,
}

impl<'a> OrderFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            total_price: 100.0,
            payment_method: "cash".to_string(),
            delivery_method: "smsa".to_string(),
            status: "pending".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn total_price(mut self, total_price: f64) -> Self {
        self.total_price = total_price;
        self
    }

    pub fn payment_method(mut self, payment_method: impl Into<String>) -> Self {
        self.payment_method = payment_method.into();
        self
    }

    pub fn delivery_method(mut self, delivery_method: impl Into<String>) -> Self {
        self.delivery_method = delivery_method.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the creation time, used by tests that depend on ordering or date ranges.
    pub fn created_at(mut self, created_at: chrono::DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::customer_order::Model, DbErr> {
        entity::customer_order::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            total_price: ActiveValue::Set(self.total_price),
            payment_method: ActiveValue::Set(self.payment_method),
            delivery_method: ActiveValue::Set(self.delivery_method),
            status: ActiveValue::Set(self.status),
            payment_reference: ActiveValue::Set(None),
            tracking_number: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending order with default values for the given user.
pub async fn create_order(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::customer_order::Model, DbErr> {
    OrderFactory::new(db, user_id).build().await
}

/// Adds a line item to an existing order.
pub async fn create_order_item(
    db: &DatabaseConnection,
    order_id: i32,
    product_id: i32,
    quantity: i32,
    unit_price: f64,
) -> Result<entity::order_item::Model, DbErr> {
    entity::order_item::ActiveModel {
        order_id: ActiveValue::Set(order_id),
        product_id: ActiveValue::Set(Some(product_id)),
        quantity: ActiveValue::Set(quantity),
        unit_price: ActiveValue::Set(unit_price),
        ..Default::default()
    }
    .insert(db)
    .await
}
