//! Order data repository.
//!
//! Orders are always returned together with their line items. Item rows for a batch
//! of orders are fetched in one query and grouped by order ID.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::{internal::InternalError, AppError},
    model::order::{NewOrder, Order, OrderStatus},
};

pub struct OrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an order and its line items with status `pending`.
    ///
    /// # Returns
    /// - `Ok(Order)` - The stored order including item IDs
    /// - `Err(AppError)` - Insert failed
    pub async fn create(&self, new_order: NewOrder) -> Result<Order, AppError> {
        let order = entity::customer_order::ActiveModel {
            user_id: ActiveValue::Set(new_order.user_id),
            total_price: ActiveValue::Set(new_order.total_price),
            payment_method: ActiveValue::Set(new_order.payment_method.as_str().to_string()),
            delivery_method: ActiveValue::Set(new_order.delivery_method.as_str().to_string()),
            status: ActiveValue::Set(OrderStatus::Pending.as_str().to_string()),
            payment_reference: ActiveValue::Set(new_order.payment_reference),
            tracking_number: ActiveValue::Set(new_order.tracking_number),
            created_at: ActiveValue::Set(new_order.placed_at),
            updated_at: ActiveValue::Set(new_order.placed_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for line in new_order.lines {
            entity::order_item::ActiveModel {
                order_id: ActiveValue::Set(order.id),
                product_id: ActiveValue::Set(Some(line.product_id)),
                quantity: ActiveValue::Set(line.quantity),
                unit_price: ActiveValue::Set(line.unit_price),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        let order_id = order.id;
        self.with_items(vec![order])
            .await?
            .pop()
            .ok_or_else(|| {
                InternalError::MissingAfterWrite {
                    entity: "customer_order",
                    id: order_id,
                }
                .into()
            })
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Order>, AppError> {
        let Some(order) = entity::prelude::CustomerOrder::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.with_items(vec![order]).await?.pop())
    }

    /// Lists all orders, newest first.
    ///
    /// # Returns
    /// - `Ok((orders, total))` - Orders on the requested page and the total order count
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Order>, u64), AppError> {
        let paginator = entity::prelude::CustomerOrder::find()
            .order_by_desc(entity::customer_order::Column::CreatedAt)
            .order_by_desc(entity::customer_order::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let orders = self.with_items(paginator.fetch_page(page).await?).await?;

        Ok((orders, total))
    }

    /// Orders placed by one user, newest first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Order>, AppError> {
        let orders = entity::prelude::CustomerOrder::find()
            .filter(entity::customer_order::Column::UserId.eq(user_id))
            .order_by_desc(entity::customer_order::Column::CreatedAt)
            .order_by_desc(entity::customer_order::Column::Id)
            .all(self.db)
            .await?;

        self.with_items(orders).await
    }

    /// Most recent order placed by a user.
    pub async fn last_by_user(&self, user_id: i32) -> Result<Option<Order>, AppError> {
        let Some(order) = entity::prelude::CustomerOrder::find()
            .filter(entity::customer_order::Column::UserId.eq(user_id))
            .order_by_desc(entity::customer_order::Column::CreatedAt)
            .order_by_desc(entity::customer_order::Column::Id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.with_items(vec![order]).await?.pop())
    }

    /// Sets the order status.
    ///
    /// # Returns
    /// - `Ok(Some(Order))` - The updated order
    /// - `Ok(None)` - No order with that ID
    pub async fn update_status(
        &self,
        id: i32,
        status: OrderStatus,
    ) -> Result<Option<Order>, AppError> {
        let updated = self
            .set_column(
                id,
                entity::customer_order::Column::Status,
                status.as_str().to_string(),
            )
            .await?;

        if !updated {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Stores the payment provider's reference, e.g. a Stripe session ID.
    pub async fn set_payment_reference(&self, id: i32, reference: String) -> Result<bool, AppError> {
        self.set_column(id, entity::customer_order::Column::PaymentReference, reference)
            .await
    }

    /// Stores the tracking number assigned by a carrier.
    pub async fn set_tracking_number(&self, id: i32, tracking: String) -> Result<bool, AppError> {
        self.set_column(id, entity::customer_order::Column::TrackingNumber, tracking)
            .await
    }

    /// Deletes an order together with its items.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        entity::prelude::OrderItem::delete_many()
            .filter(entity::order_item::Column::OrderId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::CustomerOrder::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Sums the totals of non-cancelled orders created in `[start, end)`.
    ///
    /// # Returns
    /// - `Ok((total_sales, orders_count))`
    pub async fn sales_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<(f64, u64), AppError> {
        let orders = entity::prelude::CustomerOrder::find()
            .filter(entity::customer_order::Column::CreatedAt.gte(start))
            .filter(entity::customer_order::Column::CreatedAt.lt(end))
            .filter(entity::customer_order::Column::Status.ne(OrderStatus::Cancelled.as_str()))
            .all(self.db)
            .await?;

        let total = orders.iter().map(|o| o.total_price).sum();

        Ok((total, orders.len() as u64))
    }

    async fn set_column(
        &self,
        id: i32,
        column: entity::customer_order::Column,
        value: String,
    ) -> Result<bool, AppError> {
        let result = entity::prelude::CustomerOrder::update_many()
            .col_expr(column, Expr::value(value))
            .col_expr(
                entity::customer_order::Column::UpdatedAt,
                Expr::value(Utc::now()),
            )
            .filter(entity::customer_order::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Loads the items of every given order and converts them, preserving order.
    async fn with_items(
        &self,
        orders: Vec<entity::customer_order::Model>,
    ) -> Result<Vec<Order>, AppError> {
        if orders.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = orders.iter().map(|o| o.id).collect();
        let items = entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.is_in(ids))
            .order_by_asc(entity::order_item::Column::Id)
            .all(self.db)
            .await?;

        let mut grouped: HashMap<i32, Vec<entity::order_item::Model>> = HashMap::new();
        for item in items {
            grouped.entry(item.order_id).or_default().push(item);
        }

        orders
            .into_iter()
            .map(|order| {
                let items = grouped.remove(&order.id).unwrap_or_default();
                Order::from_entity(order, items)
            })
            .collect()
    }
}
