use chrono::{Duration, TimeZone, Utc};

use crate::server::{
    data::order::OrderRepository,
    error::AppError,
    model::order::{DeliveryMethod, NewOrder, OrderStatus, PaymentMethod, PricedLine},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_user;
mod sales_between;
mod update_status;
