//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*`
//! shorthand that inserts a row with defaults. Factories never create their
//! dependencies implicitly except through the helpers in `helpers`.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let admin = factory::user::UserFactory::new(&db).role("admin").build().await?;
//! let product = factory::product::ProductFactory::new(&db)
//!     .brand("Caterpillar")
//!     .stock(3)
//!     .build()
//!     .await?;
//! let (user, product, order) = factory::helpers::create_order_with_dependencies(&db).await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Customers, companies and admins
//! - `product` - Spare parts
//! - `order` - Orders and order items
//! - `subscription` - Loyalty subscriptions
//! - `feedback` - Ratings and comments
//! - `maintenance` - Maintenance requests
//! - `chat_message` - Assistant message log entries
//! - `offer` - Product discounts
//! - `faq` - Frequently asked questions
//! - `helpers` - ID generation and multi-entity helpers

pub mod chat_message;
pub mod faq;
pub mod feedback;
pub mod helpers;
pub mod maintenance;
pub mod offer;
pub mod order;
pub mod product;
pub mod subscription;
pub mod user;

pub use chat_message::create_chat_message;
pub use faq::create_faq;
pub use feedback::create_feedback;
pub use maintenance::create_maintenance_request;
pub use offer::create_offer;
pub use order::{create_order, create_order_item};
pub use product::create_product;
pub use subscription::create_subscription;
pub use user::{create_admin, create_user};
