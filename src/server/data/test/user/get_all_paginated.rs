use super::*;

/// Tests paging through users in creation order.
///
/// Expected: Ok with page contents and the total count
#[tokio::test]
async fn pages_through_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut ids = Vec::new();
    for _ in 0..5 {
        ids.push(factory::user::create_user(db).await?.id);
    }

    let repo = UserRepository::new(db);
    let (first, total) = repo.get_all_paginated(0, 2).await?;
    let (last, _) = repo.get_all_paginated(2, 2).await?;

    assert_eq!(total, 5);
    assert_eq!(
        first.iter().map(|u| u.id).collect::<Vec<_>>(),
        ids[0..2].to_vec()
    );
    assert_eq!(last.len(), 1);
    assert_eq!(last[0].id, ids[4]);

    Ok(())
}
