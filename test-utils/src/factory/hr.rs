//! Factories for the per-user HR record family.

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub async fn create_hr_file(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::hr_file::Model, DbErr> {
    entity::hr_file::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        data: ActiveValue::Set(serde_json::json!({"position": "Engineer"})),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_leave_record(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::leave_record::Model, DbErr> {
    let today = Utc::now().date_naive();
    entity::leave_record::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        leave_type: ActiveValue::Set("annual".to_string()),
        start_date: ActiveValue::Set(today),
        end_date: ActiveValue::Set(today + Duration::days(5)),
        reason: ActiveValue::Set(String::new()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_timesheet(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::timesheet::Model, DbErr> {
    entity::timesheet::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        date: ActiveValue::Set(Utc::now().date_naive()),
        hours_worked: ActiveValue::Set(Decimal::new(750, 2)),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_payslip(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::payslip::Model, DbErr> {
    entity::payslip::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        date: ActiveValue::Set(Utc::now().date_naive()),
        amount: ActiveValue::Set(Decimal::new(420000, 2)),
        file_path: ActiveValue::Set("payslips/slip.pdf".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_performance_review(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::performance_review::Model, DbErr> {
    entity::performance_review::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        date: ActiveValue::Set(Utc::now().date_naive()),
        review: ActiveValue::Set("Meets expectations".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_expense(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::expense::Model, DbErr> {
    entity::expense::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        date: ActiveValue::Set(Utc::now().date_naive()),
        amount: ActiveValue::Set(Decimal::new(2599, 2)),
        description: ActiveValue::Set(String::new()),
        file_path: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_private_note(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::private_note::Model, DbErr> {
    entity::private_note::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        date: ActiveValue::Set(Utc::now().date_naive()),
        note: ActiveValue::Set("Follow up next week".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}
