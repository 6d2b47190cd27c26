use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, QueryOrder};

use crate::server::{
    error::AppError,
    model::faq::{Faq, FaqAuthor},
};

pub struct FaqRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FaqRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        question: String,
        answer: String,
        added_by: FaqAuthor,
    ) -> Result<Faq, AppError> {
        let entity = entity::faq::ActiveModel {
            question: ActiveValue::Set(question),
            answer: ActiveValue::Set(answer),
            added_by: ActiveValue::Set(added_by.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Faq::from_entity(entity)
    }

    /// All entries in the order they were added.
    pub async fn get_all(&self) -> Result<Vec<Faq>, AppError> {
        entity::prelude::Faq::find()
            .order_by_asc(entity::faq::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Faq::from_entity)
            .collect()
    }
}
