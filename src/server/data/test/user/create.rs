use super::*;

/// Tests creating a user and reading it back by id.
#[tokio::test]
async fn creates_and_finds_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
        })
        .await?;

    let found = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(found.username, "alice");
    assert_eq!(found.email, "alice@example.com");

    Ok(())
}

/// Tests that a duplicate username is rejected by the unique constraint.
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(CreateUserParams {
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
    })
    .await?;

    let result = repo
        .create(CreateUserParams {
            username: "alice".to_string(),
            email: "alice2@example.com".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests batched id resolution.
#[tokio::test]
async fn finds_users_by_id_set() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user1 = factory::create_user(db).await?;
    let user2 = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_ids(&[user1.id, user2.id, 9999]).await?;

    assert_eq!(found.len(), 2);

    Ok(())
}
