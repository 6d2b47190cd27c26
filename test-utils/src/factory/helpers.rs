//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to derive unique usernames, emails and phone numbers so factory rows never
/// collide on the unique constraints.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a customer, a product and a pending order containing one unit of the product.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, product, order))` - The created rows
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::product::Model,
        entity::customer_order::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let product = crate::factory::product::create_product(db).await?;
    let order = crate::factory::order::create_order(db, user.id).await?;
    crate::factory::order::create_order_item(db, order.id, product.id, 1, product.price).await?;

    Ok((user, product, order))
}
