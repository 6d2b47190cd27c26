//! SeaORM entity definitions for the spare-parts store.

pub mod prelude;

pub mod chat_message;
pub mod customer_order;
pub mod faq;
pub mod feedback;
pub mod maintenance_request;
pub mod offer;
pub mod order_item;
pub mod product;
pub mod subscription;
pub mod user;
