use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct OrderItemInputDto {
    pub product_id: i32,
    pub quantity: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateOrderDto {
    pub items: Vec<OrderItemInputDto>,
    /// `credit_card`, `tamara`, `tabby`, `custom_installment` or `cash`
    pub payment_method: String,
    /// `smsa`, `aramex` or `site_pickup`
    pub delivery_method: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderItemDto {
    pub id: i32,
    /// `null` once the product has been removed from the catalogue
    pub product_id: Option<i32>,
    pub quantity: i32,
    pub unit_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderDto {
    pub id: i32,
    pub user_id: i32,
    pub items: Vec<OrderItemDto>,
    pub total_price: f64,
    pub payment_method: String,
    pub delivery_method: String,
    /// `pending`, `processing`, `shipped`, `delivered` or `cancelled`
    pub status: String,
    pub payment_reference: Option<String>,
    pub tracking_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedOrdersDto {
    pub orders: Vec<OrderDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateOrderStatusDto {
    pub status: String,
}
