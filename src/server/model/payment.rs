use crate::model::payment::CheckoutSessionDto;

/// A created Stripe Checkout session.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutSession {
    pub id: String,
    pub url: Option<String>,
}

impl CheckoutSession {
    pub fn into_dto(self) -> CheckoutSessionDto {
        CheckoutSessionDto {
            id: self.id,
            url: self.url,
        }
    }
}
