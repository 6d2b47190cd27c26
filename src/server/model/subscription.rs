use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::{
    model::subscription::SubscriptionDto,
    server::{error::AppError, util::parse::parse_stored},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionType {
    Basic,
    Premium,
}

impl SubscriptionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Premium => "premium",
        }
    }
}

impl FromStr for SubscriptionType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(Self::Basic),
            "premium" => Ok(Self::Premium),
            _ => Err(()),
        }
    }
}

/// Loyalty record of a returning customer. A user holds at most one.
#[derive(Debug, Clone, PartialEq)]
pub struct Subscription {
    pub id: i32,
    pub user_id: i32,
    pub subscription_type: SubscriptionType,
    pub is_loyal: bool,
    pub start_date: DateTime<Utc>,
    pub last_purchase: Option<DateTime<Utc>>,
}

impl Subscription {
    pub fn from_entity(entity: entity::subscription::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            subscription_type: parse_stored(
                "subscription.subscription_type",
                entity.subscription_type,
            )?,
            is_loyal: entity.is_loyal,
            start_date: entity.start_date,
            last_purchase: entity.last_purchase,
        })
    }

    pub fn into_dto(self) -> SubscriptionDto {
        SubscriptionDto {
            id: self.id,
            user_id: self.user_id,
            subscription_type: self.subscription_type.as_str().to_string(),
            is_loyal: self.is_loyal,
            start_date: self.start_date,
            last_purchase: self.last_purchase,
        }
    }
}
