use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Subscription};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Subscription)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys should be added after the tables they
    /// reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables needed to place orders.
    ///
    /// Adds, in dependency order: User, Product, CustomerOrder, OrderItem, Subscription.
    /// Subscription is included because placing an order stamps the buyer's
    /// subscription with the purchase time.
    pub fn with_commerce_tables(self) -> Self {
        self.with_table(User)
            .with_table(Product)
            .with_table(CustomerOrder)
            .with_table(OrderItem)
            .with_table(Subscription)
    }

    /// Adds every table of the application schema.
    pub fn with_all_tables(self) -> Self {
        self.with_commerce_tables()
            .with_table(Feedback)
            .with_table(MaintenanceRequest)
            .with_table(ChatMessage)
            .with_table(Offer)
            .with_table(Faq)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
