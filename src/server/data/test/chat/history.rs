use super::*;

/// Tests the conversation log is per user and oldest first.
///
/// Expected: Ok with the user's messages in chronological order
#[tokio::test]
async fn returns_user_messages_in_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let now = Utc::now();

    factory::chat_message::create_chat_message(
        db,
        other.id,
        "user",
        "Unrelated",
        now - Duration::minutes(5),
    )
    .await?;

    let repo = ChatRepository::new(db);
    repo.append(
        user.id,
        ChatSender::User,
        "Which filter fits a 320D?".to_string(),
        now - Duration::minutes(2),
    )
    .await?;
    repo.append(
        user.id,
        ChatSender::Bot,
        "The 1R-0750 fuel filter.".to_string(),
        now - Duration::minutes(1),
    )
    .await?;

    let history = repo.history(user.id).await?;

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].sender, ChatSender::User);
    assert_eq!(history[1].sender, ChatSender::Bot);
    assert_eq!(history[1].message, "The 1R-0750 fuel filter.");

    Ok(())
}
