//! Order placement and management.
//!
//! Placing an order runs in one database transaction: every line is priced from
//! the catalogue, its stock is checked and reserved, the order and its items are
//! inserted and the buyer's subscription records the purchase. Any failure rolls
//! the whole order back.

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        order::OrderRepository, product::ProductRepository,
        subscription::SubscriptionRepository,
    },
    error::AppError,
    model::order::{CreateOrderParams, NewOrder, Order, OrderStatus, PaginatedOrders, PricedLine},
    service::trending::TrendingCache,
    util::validate::total_pages,
};

pub struct OrderService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Places an order, reserving stock for every line.
    ///
    /// Stock is reserved with a conditional update on the stock value read in the
    /// same transaction; if another order changed it in between the reservation
    /// fails and the order is rejected as a conflict.
    ///
    /// # Returns
    /// - `Ok(Order)` - The placed order with its items
    /// - `Err(AppError::BadRequest)` - No items, or a quantity below one
    /// - `Err(AppError::NotFound)` - A product does not exist
    /// - `Err(AppError::Conflict)` - Insufficient stock for a product
    pub async fn create(
        &self,
        params: CreateOrderParams,
        trending: &TrendingCache,
    ) -> Result<Order, AppError> {
        if params.lines.is_empty() {
            return Err(AppError::BadRequest("Order must contain at least one item".to_string()));
        }
        if let Some(line) = params.lines.iter().find(|line| line.quantity < 1) {
            return Err(AppError::BadRequest(format!(
                "Quantity for product {} must be at least 1",
                line.product_id
            )));
        }

        let txn = self.db.begin().await?;
        let product_repo = ProductRepository::new(&txn);

        let mut priced = Vec::with_capacity(params.lines.len());
        for line in &params.lines {
            let product = product_repo
                .find_by_id(line.product_id)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!("Product {} not found", line.product_id))
                })?;

            if product.stock < line.quantity {
                return Err(AppError::Conflict(format!(
                    "Insufficient stock for {}: {} available",
                    product.name, product.stock
                )));
            }

            if !product_repo
                .reserve_stock(product.id, line.quantity, product.stock)
                .await?
            {
                return Err(AppError::Conflict(format!(
                    "Stock for {} changed while placing the order",
                    product.name
                )));
            }

            priced.push(PricedLine {
                product_id: product.id,
                quantity: line.quantity,
                unit_price: product.price,
            });
        }

        let total_price = priced
            .iter()
            .map(|line| line.unit_price * line.quantity as f64)
            .sum();
        let placed_at = Utc::now();

        let order = OrderRepository::new(&txn)
            .create(NewOrder {
                user_id: params.user_id,
                lines: priced,
                total_price,
                payment_method: params.payment_method,
                delivery_method: params.delivery_method,
                payment_reference: params.payment_method.initial_reference(placed_at),
                tracking_number: params.delivery_method.initial_tracking_number(),
                placed_at,
            })
            .await?;

        SubscriptionRepository::new(&txn)
            .touch_last_purchase(params.user_id, placed_at)
            .await?;

        txn.commit().await?;
        trending.invalidate().await;

        tracing::info!(
            "User {} placed order {} totalling {:.2}",
            order.user_id,
            order.id,
            order.total_price
        );

        Ok(order)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Order>, AppError> {
        OrderRepository::new(self.db).find_by_id(id).await
    }

    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<PaginatedOrders, AppError> {
        let (orders, total) = OrderRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?;

        Ok(PaginatedOrders {
            orders,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Order>, AppError> {
        OrderRepository::new(self.db).get_by_user(user_id).await
    }

    pub async fn last_by_user(&self, user_id: i32) -> Result<Option<Order>, AppError> {
        OrderRepository::new(self.db).last_by_user(user_id).await
    }

    pub async fn update_status(
        &self,
        id: i32,
        status: OrderStatus,
    ) -> Result<Option<Order>, AppError> {
        let order = OrderRepository::new(self.db).update_status(id, status).await?;
        if order.is_some() {
            tracing::info!("Order {} moved to {}", id, status.as_str());
        }
        Ok(order)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        OrderRepository::new(self.db).delete(id).await
    }
}
