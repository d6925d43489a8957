use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::hr::{CreateHrFileParams, CreateLeaveRecordParams, CreateTimesheetParams},
    service::hr::HrService,
};

/// Tests that a second HR file for the same user is rejected.
#[tokio::test]
async fn create_hr_file_rejects_duplicate() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let service = HrService::new(db);
    service
        .create_hr_file(CreateHrFileParams {
            user_id: user.id,
            data: serde_json::json!({}),
        })
        .await
        .unwrap();

    let second = service
        .create_hr_file(CreateHrFileParams {
            user_id: user.id,
            data: serde_json::json!({}),
        })
        .await;

    assert!(matches!(second, Err(AppError::Validation(_))));
    assert_eq!(entity::prelude::HrFile::find().count(db).await?, 1);

    Ok(())
}

/// Tests that an HR file for an unknown user fails with NotFound.
#[tokio::test]
async fn create_hr_file_for_missing_user_persists_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = HrService::new(db);
    let result = service
        .create_hr_file(CreateHrFileParams {
            user_id: 999,
            data: serde_json::json!({}),
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(entity::prelude::HrFile::find().count(db).await?, 0);

    Ok(())
}

/// Tests that requesting your HR file before one exists is a NotFound.
#[tokio::test]
async fn get_hr_file_without_one_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let service = HrService::new(db);
    let result = service.get_hr_file_for_user(user.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests the leave date-range validation.
#[tokio::test]
async fn create_leave_record_rejects_inverted_range() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let today = Utc::now().date_naive();
    let service = HrService::new(db);
    let result = service
        .create_leave_record(CreateLeaveRecordParams {
            user_id: user.id,
            leave_type: "annual".to_string(),
            start_date: today,
            end_date: today - Duration::days(1),
            reason: String::new(),
        })
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(entity::prelude::LeaveRecord::find().count(db).await?, 0);

    Ok(())
}

/// Tests that negative logged hours are rejected.
#[tokio::test]
async fn create_timesheet_rejects_negative_hours() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let service = HrService::new(db);
    let result = service
        .create_timesheet(CreateTimesheetParams {
            user_id: user.id,
            date: Utc::now().date_naive(),
            hours_worked: Decimal::new(-100, 2),
        })
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests that per-user reads stay scoped to the requesting user.
#[tokio::test]
async fn personal_listings_are_scoped_to_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user1 = factory::create_user(db).await?;
    let user2 = factory::create_user(db).await?;

    factory::hr::create_expense(db, user1.id).await?;
    factory::hr::create_expense(db, user1.id).await?;
    factory::hr::create_expense(db, user2.id).await?;

    let service = HrService::new(db);
    let for_user1 = service.get_expenses_for_user(user1.id).await.unwrap();
    let for_user2 = service.get_expenses_for_user(user2.id).await.unwrap();

    assert_eq!(for_user1.len(), 2);
    assert_eq!(for_user2.len(), 1);
    assert!(for_user1.iter().all(|expense| expense.user.id == user1.id));

    Ok(())
}
