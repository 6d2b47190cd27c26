//! Database repository layer for all domain entities.
//!
//! Repositories wrap SeaORM queries for one entity each and return domain models.
//! The repositories used while placing an order are generic over `ConnectionTrait`
//! so the order service can run them inside a single transaction.

pub mod chat;
pub mod faq;
pub mod feedback;
pub mod maintenance;
pub mod offer;
pub mod order;
pub mod product;
pub mod subscription;
pub mod user;

#[cfg(test)]
mod test;
