//! Transfer schemas for HR records.
//!
//! Per-user records embed the owning user in responses. Create bodies on the
//! personal surface omit the owner (the session user is the owner); create
//! bodies on the HR surface name the subject user by id.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HrFileDto {
    pub id: i32,
    pub user: UserDto,
    #[schema(value_type = Object)]
    pub data: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateHrFileDto {
    pub user_id: i32,
    #[schema(value_type = Object)]
    pub data: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LeaveRecordDto {
    pub id: i32,
    pub user: UserDto,
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateLeaveRecordDto {
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TimesheetDto {
    pub id: i32,
    pub user: UserDto,
    pub date: NaiveDate,
    #[schema(value_type = String)]
    pub hours_worked: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTimesheetDto {
    pub date: NaiveDate,
    #[schema(value_type = String)]
    pub hours_worked: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PayslipDto {
    pub id: i32,
    pub user: UserDto,
    pub date: NaiveDate,
    #[schema(value_type = String)]
    pub amount: Decimal,
    pub file_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePayslipDto {
    pub user_id: i32,
    pub date: NaiveDate,
    #[schema(value_type = String)]
    pub amount: Decimal,
    pub file_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PerformanceReviewDto {
    pub id: i32,
    pub user: UserDto,
    pub date: NaiveDate,
    pub review: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePerformanceReviewDto {
    pub user_id: i32,
    pub date: NaiveDate,
    pub review: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExpenseDto {
    pub id: i32,
    pub user: UserDto,
    pub date: NaiveDate,
    #[schema(value_type = String)]
    pub amount: Decimal,
    pub description: String,
    pub file_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateExpenseDto {
    pub date: NaiveDate,
    #[schema(value_type = String)]
    pub amount: Decimal,
    #[serde(default)]
    pub description: String,
    pub file_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PrivateNoteDto {
    pub id: i32,
    pub user: UserDto,
    pub date: NaiveDate,
    pub note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePrivateNoteDto {
    pub date: NaiveDate,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PolicyDto {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePolicyDto {
    pub title: String,
    pub content: String,
}
