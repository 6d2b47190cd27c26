use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::chat::{ChatMessage, ChatSender},
};

pub struct ChatRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChatRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a message to a user's conversation log.
    pub async fn append(
        &self,
        user_id: i32,
        sender: ChatSender,
        message: String,
        at: DateTime<Utc>,
    ) -> Result<ChatMessage, AppError> {
        let entity = entity::chat_message::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            sender: ActiveValue::Set(sender.as_str().to_string()),
            message: ActiveValue::Set(message),
            created_at: ActiveValue::Set(at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        ChatMessage::from_entity(entity)
    }

    /// A user's conversation log, oldest first.
    pub async fn history(&self, user_id: i32) -> Result<Vec<ChatMessage>, AppError> {
        entity::prelude::ChatMessage::find()
            .filter(entity::chat_message::Column::UserId.eq(user_id))
            .order_by_asc(entity::chat_message::Column::CreatedAt)
            .order_by_asc(entity::chat_message::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(ChatMessage::from_entity)
            .collect()
    }
}
