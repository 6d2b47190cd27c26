//! Chat message factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a chat log entry.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Conversation owner
/// - `sender` - `user` or `bot`
/// - `message` - Message body
/// - `created_at` - Timestamp, so tests can control ordering
pub async fn create_chat_message(
    db: &DatabaseConnection,
    user_id: i32,
    sender: &str,
    message: &str,
    created_at: DateTime<Utc>,
) -> Result<entity::chat_message::Model, DbErr> {
    entity::chat_message::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        sender: ActiveValue::Set(sender.to_string()),
        message: ActiveValue::Set(message.to_string()),
        created_at: ActiveValue::Set(created_at),
        ..Default::default()
    }
    .insert(db)
    .await
}
