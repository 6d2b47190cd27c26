//! Shipment outcome for an order.

use crate::{model::delivery::DeliveryDto, server::model::order::DeliveryMethod};

#[derive(Debug, Clone, PartialEq)]
pub struct Shipment {
    pub order_id: i32,
    pub method: DeliveryMethod,
    pub tracking_number: Option<String>,
    /// Carrier response body; `None` for site pickup
    pub carrier_response: Option<serde_json::Value>,
}

impl Shipment {
    pub fn into_dto(self) -> DeliveryDto {
        DeliveryDto {
            order_id: self.order_id,
            delivery_option: self.method.as_str().to_string(),
            tracking_number: self.tracking_number,
            carrier_response: self.carrier_response,
        }
    }
}
