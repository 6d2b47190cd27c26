use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct DeliveryRequestDto {
    pub order_id: i32,
    /// `smsa`, `aramex` or `site_pickup`
    pub delivery_option: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeliveryDto {
    pub order_id: i32,
    pub delivery_option: String,
    pub tracking_number: Option<String>,
    /// Raw response body returned by the carrier, absent for site pickup
    #[schema(value_type = Option<Object>)]
    pub carrier_response: Option<serde_json::Value>,
}
