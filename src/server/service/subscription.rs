//! Loyalty subscriptions. Each user holds at most one.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::subscription::SubscriptionRepository,
    error::AppError,
    model::subscription::{Subscription, SubscriptionType},
};

pub struct SubscriptionService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> SubscriptionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// # Returns
    /// - `Ok(Subscription)` - The new subscription
    /// - `Err(AppError::Conflict)` - The user already has a subscription
    pub async fn subscribe(
        &self,
        user_id: i32,
        subscription_type: SubscriptionType,
    ) -> Result<Subscription, AppError> {
        let repo = SubscriptionRepository::new(self.db);
        if repo.find_by_user(user_id).await?.is_some() {
            return Err(AppError::Conflict(
                "User already has a subscription".to_string(),
            ));
        }

        repo.create(user_id, subscription_type).await
    }

    pub async fn get_for_user(&self, user_id: i32) -> Result<Option<Subscription>, AppError> {
        SubscriptionRepository::new(self.db).find_by_user(user_id).await
    }

    pub async fn set_loyalty(
        &self,
        user_id: i32,
        is_loyal: bool,
    ) -> Result<Option<Subscription>, AppError> {
        SubscriptionRepository::new(self.db)
            .set_loyalty(user_id, is_loyal)
            .await
    }
}
