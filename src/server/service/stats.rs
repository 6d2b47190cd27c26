//! Admin dashboard statistics.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{order::OrderRepository, product::ProductRepository},
    error::AppError,
    model::stats::{InventoryItem, MonthlySales},
};

pub struct StatsService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sales for the calendar month (UTC) containing `now`, cancelled orders excluded.
    pub async fn monthly_sales(&self, now: DateTime<Utc>) -> Result<MonthlySales, AppError> {
        let (start, end) = month_bounds(now)?;
        let (total_sales, orders_count) = OrderRepository::new(self.db)
            .sales_between(start, end)
            .await?;

        Ok(MonthlySales {
            month: start.format("%Y-%m").to_string(),
            total_sales,
            orders_count,
        })
    }

    pub async fn inventory(&self) -> Result<Vec<InventoryItem>, AppError> {
        ProductRepository::new(self.db).inventory().await
    }
}

/// Start of the month containing `now` and start of the following month.
fn month_bounds(now: DateTime<Utc>) -> Result<(DateTime<Utc>, DateTime<Utc>), AppError> {
    let (next_year, next_month) = if now.month() == 12 {
        (now.year() + 1, 1)
    } else {
        (now.year(), now.month() + 1)
    };

    let start = Utc.with_ymd_and_hms(now.year(), now.month(), 1, 0, 0, 0).single();
    let end = Utc.with_ymd_and_hms(next_year, next_month, 1, 0, 0, 0).single();

    match (start, end) {
        (Some(start), Some(end)) => Ok((start, end)),
        _ => Err(AppError::InternalError(format!(
            "Could not compute month bounds for {}",
            now
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    #[test]
    fn december_rolls_into_next_year() {
        let now = Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 0).unwrap();

        let (start, end) = month_bounds(now).unwrap();

        assert_eq!(start, Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap());
    }

    #[tokio::test]
    async fn reports_month_label_and_totals() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_commerce_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::user::create_user(db).await?;
        let now = Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap();
        factory::order::OrderFactory::new(db, user.id)
            .total_price(75.0)
            .created_at(now)
            .build()
            .await?;

        let sales = StatsService::new(db).monthly_sales(now).await?;

        assert_eq!(sales.month, "2025-03");
        assert_eq!(sales.total_sales, 75.0);
        assert_eq!(sales.orders_count, 1);

        Ok(())
    }
}
