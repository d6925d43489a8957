//! HR record domain models and parameters.
//!
//! Every record type resolves its owning user at the repository boundary.
//! Parameters for personal-surface creates carry the session user's id,
//! injected by the service rather than taken from the request body.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::{
    model::hr::{
        CreateExpenseDto, CreateHrFileDto, CreateLeaveRecordDto, CreatePayslipDto,
        CreatePerformanceReviewDto, CreatePolicyDto, CreatePrivateNoteDto, CreateTimesheetDto,
        ExpenseDto, HrFileDto, LeaveRecordDto, PayslipDto, PerformanceReviewDto, PolicyDto,
        PrivateNoteDto, TimesheetDto,
    },
    server::model::user::User,
};

#[derive(Debug, Clone, PartialEq)]
pub struct HrFile {
    pub id: i32,
    pub user: User,
    pub data: serde_json::Value,
}

impl HrFile {
    pub fn from_entity(file: entity::hr_file::Model, user: entity::user::Model) -> Self {
        Self {
            id: file.id,
            user: User::from_entity(user),
            data: file.data,
        }
    }

    pub fn into_dto(self) -> HrFileDto {
        HrFileDto {
            id: self.id,
            user: self.user.into_dto(),
            data: self.data,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateHrFileParams {
    pub user_id: i32,
    pub data: serde_json::Value,
}

impl CreateHrFileParams {
    pub fn from_dto(dto: CreateHrFileDto) -> Self {
        Self {
            user_id: dto.user_id,
            data: dto.data,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeaveRecord {
    pub id: i32,
    pub user: User,
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

impl LeaveRecord {
    pub fn from_entity(record: entity::leave_record::Model, user: entity::user::Model) -> Self {
        Self {
            id: record.id,
            user: User::from_entity(user),
            leave_type: record.leave_type,
            start_date: record.start_date,
            end_date: record.end_date,
            reason: record.reason,
        }
    }

    pub fn into_dto(self) -> LeaveRecordDto {
        LeaveRecordDto {
            id: self.id,
            user: self.user.into_dto(),
            leave_type: self.leave_type,
            start_date: self.start_date,
            end_date: self.end_date,
            reason: self.reason,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateLeaveRecordParams {
    pub user_id: i32,
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

impl CreateLeaveRecordParams {
    pub fn from_dto(user_id: i32, dto: CreateLeaveRecordDto) -> Self {
        Self {
            user_id,
            leave_type: dto.leave_type,
            start_date: dto.start_date,
            end_date: dto.end_date,
            reason: dto.reason,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Timesheet {
    pub id: i32,
    pub user: User,
    pub date: NaiveDate,
    pub hours_worked: Decimal,
}

impl Timesheet {
    pub fn from_entity(timesheet: entity::timesheet::Model, user: entity::user::Model) -> Self {
        Self {
            id: timesheet.id,
            user: User::from_entity(user),
            date: timesheet.date,
            hours_worked: timesheet.hours_worked,
        }
    }

    pub fn into_dto(self) -> TimesheetDto {
        TimesheetDto {
            id: self.id,
            user: self.user.into_dto(),
            date: self.date,
            hours_worked: self.hours_worked,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTimesheetParams {
    pub user_id: i32,
    pub date: NaiveDate,
    pub hours_worked: Decimal,
}

impl CreateTimesheetParams {
    pub fn from_dto(user_id: i32, dto: CreateTimesheetDto) -> Self {
        Self {
            user_id,
            date: dto.date,
            hours_worked: dto.hours_worked,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Payslip {
    pub id: i32,
    pub user: User,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub file_path: String,
}

impl Payslip {
    pub fn from_entity(payslip: entity::payslip::Model, user: entity::user::Model) -> Self {
        Self {
            id: payslip.id,
            user: User::from_entity(user),
            date: payslip.date,
            amount: payslip.amount,
            file_path: payslip.file_path,
        }
    }

    pub fn into_dto(self) -> PayslipDto {
        PayslipDto {
            id: self.id,
            user: self.user.into_dto(),
            date: self.date,
            amount: self.amount,
            file_path: self.file_path,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePayslipParams {
    pub user_id: i32,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub file_path: String,
}

impl CreatePayslipParams {
    pub fn from_dto(dto: CreatePayslipDto) -> Self {
        Self {
            user_id: dto.user_id,
            date: dto.date,
            amount: dto.amount,
            file_path: dto.file_path,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceReview {
    pub id: i32,
    pub user: User,
    pub date: NaiveDate,
    pub review: String,
}

impl PerformanceReview {
    pub fn from_entity(
        review: entity::performance_review::Model,
        user: entity::user::Model,
    ) -> Self {
        Self {
            id: review.id,
            user: User::from_entity(user),
            date: review.date,
            review: review.review,
        }
    }

    pub fn into_dto(self) -> PerformanceReviewDto {
        PerformanceReviewDto {
            id: self.id,
            user: self.user.into_dto(),
            date: self.date,
            review: self.review,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePerformanceReviewParams {
    pub user_id: i32,
    pub date: NaiveDate,
    pub review: String,
}

impl CreatePerformanceReviewParams {
    pub fn from_dto(dto: CreatePerformanceReviewDto) -> Self {
        Self {
            user_id: dto.user_id,
            date: dto.date,
            review: dto.review,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: i32,
    pub user: User,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub description: String,
    pub file_path: Option<String>,
}

impl Expense {
    pub fn from_entity(expense: entity::expense::Model, user: entity::user::Model) -> Self {
        Self {
            id: expense.id,
            user: User::from_entity(user),
            date: expense.date,
            amount: expense.amount,
            description: expense.description,
            file_path: expense.file_path,
        }
    }

    pub fn into_dto(self) -> ExpenseDto {
        ExpenseDto {
            id: self.id,
            user: self.user.into_dto(),
            date: self.date,
            amount: self.amount,
            description: self.description,
            file_path: self.file_path,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateExpenseParams {
    pub user_id: i32,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub description: String,
    pub file_path: Option<String>,
}

impl CreateExpenseParams {
    pub fn from_dto(user_id: i32, dto: CreateExpenseDto) -> Self {
        Self {
            user_id,
            date: dto.date,
            amount: dto.amount,
            description: dto.description,
            file_path: dto.file_path,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrivateNote {
    pub id: i32,
    pub user: User,
    pub date: NaiveDate,
    pub note: String,
}

impl PrivateNote {
    pub fn from_entity(note: entity::private_note::Model, user: entity::user::Model) -> Self {
        Self {
            id: note.id,
            user: User::from_entity(user),
            date: note.date,
            note: note.note,
        }
    }

    pub fn into_dto(self) -> PrivateNoteDto {
        PrivateNoteDto {
            id: self.id,
            user: self.user.into_dto(),
            date: self.date,
            note: self.note,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePrivateNoteParams {
    pub user_id: i32,
    pub date: NaiveDate,
    pub note: String,
}

impl CreatePrivateNoteParams {
    pub fn from_dto(user_id: i32, dto: CreatePrivateNoteDto) -> Self {
        Self {
            user_id,
            date: dto.date,
            note: dto.note,
        }
    }
}

/// Company policy, standalone with no owner.
#[derive(Debug, Clone, PartialEq)]
pub struct Policy {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Policy {
    pub fn from_entity(entity: entity::policy::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            content: entity.content,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> PolicyDto {
        PolicyDto {
            id: self.id,
            title: self.title,
            content: self.content,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePolicyParams {
    pub title: String,
    pub content: String,
}

impl CreatePolicyParams {
    pub fn from_dto(dto: CreatePolicyDto) -> Self {
        Self {
            title: dto.title,
            content: dto.content,
        }
    }
}
