//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. String columns holding a fixed set
//! of values (roles, statuses, payment methods) are parsed into enums here.

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
pub mod user;
