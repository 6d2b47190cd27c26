use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MonthlySalesDto {
    /// `YYYY-MM`
    pub month: String,
    pub total_sales: f64,
    pub orders_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InventoryItemDto {
    pub id: i32,
    pub name: String,
    pub stock: i32,
}
