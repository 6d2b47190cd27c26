//! Order domain models and parameters.
//!
//! An order is created in one step from a list of product lines. Unit prices are
//! captured from the catalogue at creation and never change afterwards.

use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::{
    model::order::{CreateOrderDto, OrderDto, OrderItemDto, PaginatedOrdersDto},
    server::{
        error::AppError,
        util::parse::{parse_request, parse_stored},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    CreditCard,
    Tamara,
    Tabby,
    CustomInstallment,
    Cash,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreditCard => "credit_card",
            Self::Tamara => "tamara",
            Self::Tabby => "tabby",
            Self::CustomInstallment => "custom_installment",
            Self::Cash => "cash",
        }
    }

    /// Reference recorded when the order is placed.
    ///
    /// Cash and in-house installments are settled offline and get a fixed marker.
    /// Card, Tamara and Tabby orders get their reference from the checkout session.
    pub fn initial_reference(&self, placed_at: DateTime<Utc>) -> Option<String> {
        match self {
            Self::Cash => Some("cash_on_delivery".to_string()),
            Self::CustomInstallment => Some(format!(
                "custom_installment_{}",
                placed_at.timestamp_millis()
            )),
            Self::CreditCard | Self::Tamara | Self::Tabby => None,
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "credit_card" => Ok(Self::CreditCard),
            "tamara" => Ok(Self::Tamara),
            "tabby" => Ok(Self::Tabby),
            "custom_installment" => Ok(Self::CustomInstallment),
            "cash" => Ok(Self::Cash),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMethod {
    Smsa,
    Aramex,
    SitePickup,
}

impl DeliveryMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Smsa => "smsa",
            Self::Aramex => "aramex",
            Self::SitePickup => "site_pickup",
        }
    }

    /// Tracking number known at order time; carriers assign theirs on dispatch.
    pub fn initial_tracking_number(&self) -> Option<String> {
        match self {
            Self::SitePickup => Some("site_pickup".to_string()),
            Self::Smsa | Self::Aramex => None,
        }
    }
}

impl FromStr for DeliveryMethod {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "smsa" => Ok(Self::Smsa),
            "aramex" => Ok(Self::Aramex),
            "site_pickup" => Ok(Self::SitePickup),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(()),
        }
    }
}

/// Stored order line. The line outlives its product, `product_id` is cleared when
/// the product is deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub id: i32,
    pub product_id: Option<i32>,
    pub quantity: i32,
    pub unit_price: f64,
}

impl OrderItem {
    pub fn from_entity(entity: entity::order_item::Model) -> Self {
        Self {
            id: entity.id,
            product_id: entity.product_id,
            quantity: entity.quantity,
            unit_price: entity.unit_price,
        }
    }

    pub fn into_dto(self) -> OrderItemDto {
        OrderItemDto {
            id: self.id,
            product_id: self.product_id,
            quantity: self.quantity,
            unit_price: self.unit_price,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    pub items: Vec<OrderItem>,
    pub total_price: f64,
    pub payment_method: PaymentMethod,
    pub delivery_method: DeliveryMethod,
    pub status: OrderStatus,
    pub payment_reference: Option<String>,
    pub tracking_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Builds an order from its row and its line item rows.
    ///
    /// # Returns
    /// - `Ok(Order)` - The converted order
    /// - `Err(AppError::InternalErr(UnknownStoredValue))` - An enum column holds an
    ///   unrecognised value
    pub fn from_entity(
        entity: entity::customer_order::Model,
        items: Vec<entity::order_item::Model>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            items: items.into_iter().map(OrderItem::from_entity).collect(),
            total_price: entity.total_price,
            payment_method: parse_stored("customer_order.payment_method", entity.payment_method)?,
            delivery_method: parse_stored(
                "customer_order.delivery_method",
                entity.delivery_method,
            )?,
            status: parse_stored("customer_order.status", entity.status)?,
            payment_reference: entity.payment_reference,
            tracking_number: entity.tracking_number,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            user_id: self.user_id,
            items: self.items.into_iter().map(OrderItem::into_dto).collect(),
            total_price: self.total_price,
            payment_method: self.payment_method.as_str().to_string(),
            delivery_method: self.delivery_method.as_str().to_string(),
            status: self.status.as_str().to_string(),
            payment_reference: self.payment_reference,
            tracking_number: self.tracking_number,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// One requested line of a new order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLine {
    pub product_id: i32,
    pub quantity: i32,
}

/// Validated order request.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateOrderParams {
    pub user_id: i32,
    pub lines: Vec<OrderLine>,
    pub payment_method: PaymentMethod,
    pub delivery_method: DeliveryMethod,
}

impl CreateOrderParams {
    /// Parses the payment and delivery methods of an order request.
    ///
    /// # Returns
    /// - `Ok(CreateOrderParams)` - Both methods are recognised
    /// - `Err(AppError::BadRequest)` - Unknown payment or delivery method
    pub fn from_dto(user_id: i32, dto: CreateOrderDto) -> Result<Self, AppError> {
        Ok(Self {
            user_id,
            lines: dto
                .items
                .into_iter()
                .map(|item| OrderLine {
                    product_id: item.product_id,
                    quantity: item.quantity,
                })
                .collect(),
            payment_method: parse_request("payment_method", &dto.payment_method)?,
            delivery_method: parse_request("delivery_method", &dto.delivery_method)?,
        })
    }
}

/// Line with the unit price captured from the catalogue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricedLine {
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: f64,
}

/// Order row ready to be inserted together with its items.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub user_id: i32,
    pub lines: Vec<PricedLine>,
    pub total_price: f64,
    pub payment_method: PaymentMethod,
    pub delivery_method: DeliveryMethod,
    pub payment_reference: Option<String>,
    pub tracking_number: Option<String>,
    pub placed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedOrders {
    pub orders: Vec<Order>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedOrders {
    pub fn into_dto(self) -> PaginatedOrdersDto {
        PaginatedOrdersDto {
            orders: self.orders.into_iter().map(Order::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
