use crate::model::stats::{InventoryItemDto, MonthlySalesDto};

/// Sales for one calendar month, cancelled orders excluded.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySales {
    /// `YYYY-MM`
    pub month: String,
    pub total_sales: f64,
    pub orders_count: u64,
}

impl MonthlySales {
    pub fn into_dto(self) -> MonthlySalesDto {
        MonthlySalesDto {
            month: self.month,
            total_sales: self.total_sales,
            orders_count: self.orders_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItem {
    pub id: i32,
    pub name: String,
    pub stock: i32,
}

impl InventoryItem {
    pub fn into_dto(self) -> InventoryItemDto {
        InventoryItemDto {
            id: self.id,
            name: self.name,
            stock: self.stock,
        }
    }
}
