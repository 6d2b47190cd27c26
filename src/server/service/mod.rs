//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They validate input,
//! enforce business rules, coordinate several repositories (inside a transaction
//! where needed) and call the external providers: Stripe, the shipping carriers,
//! the SMS gateway and the chat assistant.

pub mod admin;
pub mod auth;
pub mod chat;
pub mod delivery;
pub mod faq;
pub mod feedback;
pub mod maintenance;
pub mod offer;
pub mod order;
pub mod otp;
pub mod payment;
pub mod product;
pub mod sms;
pub mod stats;
pub mod subscription;
pub mod trending;
pub mod upload;
pub mod user;
