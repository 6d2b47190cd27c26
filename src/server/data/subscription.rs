use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait,
    QueryFilter,
};

use crate::server::{
    error::AppError,
    model::subscription::{Subscription, SubscriptionType},
};

pub struct SubscriptionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SubscriptionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Starts a subscription for a user. The unique user column rejects a second one.
    pub async fn create(
        &self,
        user_id: i32,
        subscription_type: SubscriptionType,
    ) -> Result<Subscription, AppError> {
        let entity = entity::subscription::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            subscription_type: ActiveValue::Set(subscription_type.as_str().to_string()),
            is_loyal: ActiveValue::Set(false),
            start_date: ActiveValue::Set(Utc::now()),
            last_purchase: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Subscription::from_entity(entity)
    }

    pub async fn find_by_user(&self, user_id: i32) -> Result<Option<Subscription>, AppError> {
        entity::prelude::Subscription::find()
            .filter(entity::subscription::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
            .map(Subscription::from_entity)
            .transpose()
    }

    /// Sets the loyalty flag.
    ///
    /// # Returns
    /// - `Ok(Some(Subscription))` - The updated subscription
    /// - `Ok(None)` - The user has no subscription
    pub async fn set_loyalty(
        &self,
        user_id: i32,
        is_loyal: bool,
    ) -> Result<Option<Subscription>, AppError> {
        entity::prelude::Subscription::update_many()
            .col_expr(entity::subscription::Column::IsLoyal, Expr::value(is_loyal))
            .filter(entity::subscription::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        self.find_by_user(user_id).await
    }

    /// Records a purchase time. Users without a subscription are left untouched.
    pub async fn touch_last_purchase(
        &self,
        user_id: i32,
        at: DateTime<Utc>,
    ) -> Result<(), AppError> {
        entity::prelude::Subscription::update_many()
            .col_expr(
                entity::subscription::Column::LastPurchase,
                Expr::value(Some(at)),
            )
            .filter(entity::subscription::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
