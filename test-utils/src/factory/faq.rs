//! FAQ factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a FAQ entry.
pub async fn create_faq(
    db: &DatabaseConnection,
    question: &str,
    answer: &str,
    added_by: &str,
) -> Result<entity::faq::Model, DbErr> {
    entity::faq::ActiveModel {
        question: ActiveValue::Set(question.to_string()),
        answer: ActiveValue::Set(answer.to_string()),
        added_by: ActiveValue::Set(added_by.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
