use super::*;

/// Tests creating a task.
///
/// New tasks start uncompleted regardless of input.
#[tokio::test]
async fn creates_open_task() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Task)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = TaskRepository::new(db);
    let task = repo
        .create(CreateTaskParams {
            title: "Write report".to_string(),
            description: String::new(),
            due_date: Utc::now() + Duration::days(3),
            assigned_to: user.id,
        })
        .await?;

    assert_eq!(task.title, "Write report");
    assert_eq!(task.assigned_to, user.id);
    assert!(!task.completed);

    Ok(())
}

/// Tests that deleting a user cascades to their tasks.
#[tokio::test]
async fn deleting_user_cascades_to_tasks() -> Result<(), DbErr> {
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

    entity::prelude::User::delete_by_id(user.id).exec(db).await?;

    let remaining = entity::prelude::Task::find().count(db).await?;
    assert_eq!(remaining, 0);

    Ok(())
}
