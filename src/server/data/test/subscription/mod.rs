use chrono::Utc;

use crate::server::{
    data::subscription::SubscriptionRepository,
    error::AppError,
    model::subscription::SubscriptionType,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod set_loyalty;
mod touch_last_purchase;
