use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError, model::okr::CreateOkrTaskParams, service::okr::OkrService,
};

fn task_params(objective_id: i32, assigned_to: i32) -> CreateOkrTaskParams {
    CreateOkrTaskParams {
        objective_id,
        title: "Ship milestone".to_string(),
        description: String::new(),
        due_date: Utc::now() + Duration::days(30),
        assigned_to,
    }
}

/// Tests that an OKR task requires an existing parent objective.
#[tokio::test]
async fn create_task_with_missing_objective_persists_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_okr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let service = OkrService::new(db);
    let result = service.create_task(task_params(999, user.id)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(entity::prelude::OkrTask::find().count(db).await?, 0);

    Ok(())
}

/// Tests that an OKR task requires an existing assignee.
#[tokio::test]
async fn create_task_with_missing_assignee_persists_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_okr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let objective = factory::create_objective(db, owner.id).await?;

    let service = OkrService::new(db);
    let result = service.create_task(task_params(objective.id, 999)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(entity::prelude::OkrTask::find().count(db).await?, 0);

    Ok(())
}

/// Tests that the dashboard aggregates real counts.
#[tokio::test]
async fn dashboard_reflects_persisted_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_okr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let objective = factory::create_objective(db, owner.id).await?;
    factory::create_okr_task(db, objective.id, owner.id).await?;
    factory::okr::create_completed_okr_task(db, objective.id, owner.id).await?;

    let service = OkrService::new(db);
    let dashboard = service.dashboard().await.unwrap();

    assert_eq!(dashboard.objective_count, 1);
    assert_eq!(dashboard.task_count, 2);
    assert_eq!(dashboard.completed_task_count, 1);

    Ok(())
}
