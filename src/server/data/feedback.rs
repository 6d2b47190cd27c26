use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::feedback::{CreateFeedbackParams, Feedback, FeedbackFilter};

pub struct FeedbackRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeedbackRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateFeedbackParams) -> Result<Feedback, DbErr> {
        let entity = entity::feedback::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            product_id: ActiveValue::Set(params.product_id),
            rating: ActiveValue::Set(params.rating),
            comment: ActiveValue::Set(params.comment),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Feedback::from_entity(entity))
    }

    /// Lists feedback matching the filter, newest first.
    pub async fn list(&self, filter: FeedbackFilter) -> Result<Vec<Feedback>, DbErr> {
        let mut query = entity::prelude::Feedback::find();
        if let Some(min) = filter.min_rating {
            query = query.filter(entity::feedback::Column::Rating.gte(min));
        }
        if let Some(max) = filter.max_rating {
            query = query.filter(entity::feedback::Column::Rating.lte(max));
        }
        if let Some(product_id) = filter.product_id {
            query = query.filter(entity::feedback::Column::ProductId.eq(product_id));
        }

        let entities = query
            .order_by_desc(entity::feedback::Column::CreatedAt)
            .order_by_desc(entity::feedback::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Feedback::from_entity).collect())
    }
}
