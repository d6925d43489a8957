use super::*;

/// Tests that per-user task queries exclude other users' tasks.
#[tokio::test]
async fn returns_only_assignees_tasks() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Task)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user1 = factory::create_user(db).await?;
    let user2 = factory::create_user(db).await?;

    factory::create_task(db, user1.id).await?;
    let task2 = factory::create_task(db, user2.id).await?;

    let repo = TaskRepository::new(db);
    let tasks = repo.get_by_assignee(user2.id).await?;

    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].0.id, task2.id);
    assert_eq!(tasks[0].1.id, user2.id);

    Ok(())
}

/// Tests open/completed counts used by the manager dashboard.
#[tokio::test]
async fn counts_open_and_completed_tasks() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Task)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    factory::create_task(db, user.id).await?;
    factory::create_task(db, user.id).await?;
    factory::task::TaskFactory::new(db, user.id)
        .completed(true)
        .build()
        .await?;

    let repo = TaskRepository::new(db);
    assert_eq!(repo.count_open().await?, 2);
    assert_eq!(repo.count_completed().await?, 1);

    Ok(())
}
