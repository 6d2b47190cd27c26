use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CheckoutSessionRequestDto {
    pub order_id: i32,
}

/// Stripe Checkout session the client redirects to.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CheckoutSessionDto {
    pub id: String,
    pub url: Option<String>,
}
