//! HTTP request handlers.
//!
//! Each handler authenticates the caller through `AuthGuard`, converts the request
//! DTO into domain params, calls one service and converts the result back into a DTO.

pub mod chat;
pub mod delivery;
pub mod faq;
pub mod feedback;
pub mod health;
pub mod maintenance;
pub mod offer;
pub mod order;
pub mod param;
pub mod payment;
pub mod product;
pub mod stats;
pub mod subscription;
pub mod upload;
pub mod user;
