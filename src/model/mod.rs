//! Request and response DTOs for the HTTP API.
//!
//! These types define the JSON contract with the mobile client. Server-side domain
//! models convert into them at the controller boundary.

pub mod api;
pub mod chat;
pub mod delivery;
pub mod faq;
pub mod feedback;
pub mod maintenance;
pub mod offer;
pub mod order;
pub mod payment;
pub mod product;
pub mod stats;
pub mod subscription;
pub mod upload;
pub mod user;
