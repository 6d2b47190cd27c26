pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_user_table;
mod m20250301_000002_create_product_table;
mod m20250301_000003_create_customer_order_table;
mod m20250301_000004_create_order_item_table;
mod m20250301_000005_create_subscription_table;
mod m20250301_000006_create_feedback_table;
mod m20250301_000007_create_maintenance_request_table;
mod m20250302_000008_create_chat_message_table;
mod m20250302_000009_create_offer_table;
mod m20250302_000010_create_faq_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_user_table::Migration),
            Box::new(m20250301_000002_create_product_table::Migration),
            Box::new(m20250301_000003_create_customer_order_table::Migration),
            Box::new(m20250301_000004_create_order_item_table::Migration),
            Box::new(m20250301_000005_create_subscription_table::Migration),
            Box::new(m20250301_000006_create_feedback_table::Migration),
            Box::new(m20250301_000007_create_maintenance_request_table::Migration),
            Box::new(m20250302_000008_create_chat_message_table::Migration),
            Box::new(m20250302_000009_create_offer_table::Migration),
            Box::new(m20250302_000010_create_faq_table::Migration),
        ]
    }
}
