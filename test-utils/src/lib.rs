//! Heavyparts Test Utils
//!
//! Shared testing utilities for the heavyparts backend. The crate builds isolated
//! in-memory SQLite databases with the tables a test needs and provides factories
//! that insert rows with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Errors that can occur during test setup
//! - **factory**: Row factories for every entity
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn places_order() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_commerce_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let user = factory::create_user(db).await?;
//!     let product = factory::create_product(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
