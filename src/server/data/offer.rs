use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::offer::{CreateOfferParams, Offer};

pub struct OfferRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OfferRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateOfferParams) -> Result<Offer, DbErr> {
        let entity = entity::offer::ActiveModel {
            product_id: ActiveValue::Set(params.product_id),
            discount: ActiveValue::Set(params.discount),
            description: ActiveValue::Set(params.description),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Offer::from_entity(entity))
    }

    /// Offers that have not ended at `now`, soonest ending first.
    ///
    /// Offers that have not started yet are included so clients can announce them.
    pub async fn active(&self, now: DateTime<Utc>) -> Result<Vec<Offer>, DbErr> {
        let entities = entity::prelude::Offer::find()
            .filter(entity::offer::Column::EndDate.gte(now))
            .order_by_asc(entity::offer::Column::EndDate)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Offer::from_entity).collect())
    }
}
