//! HR record data repository.
//!
//! One repository covers the per-user HR record family: the HR file dossier,
//! leave records, timesheets, payslips, performance reviews, expenses, and
//! private notes. Every read resolves the owning user alongside the record.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::hr::{
    CreateExpenseParams, CreateHrFileParams, CreateLeaveRecordParams, CreatePayslipParams,
    CreatePerformanceReviewParams, CreatePrivateNoteParams, CreateTimesheetParams,
};

/// Resolves the `find_also_related` user of each row, erroring on a dangling owner.
fn with_owner<M>(
    rows: Vec<(M, Option<entity::user::Model>)>,
    kind: &str,
) -> Result<Vec<(M, entity::user::Model)>, DbErr> {
    rows.into_iter()
        .map(|(record, user)| {
            let user = user
                .ok_or_else(|| DbErr::RecordNotFound(format!("Owner of {} not found", kind)))?;
            Ok((record, user))
        })
        .collect()
}

pub struct HrRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HrRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_hr_file(
        &self,
        params: CreateHrFileParams,
    ) -> Result<entity::hr_file::Model, DbErr> {
        entity::hr_file::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            data: ActiveValue::Set(params.data),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_hr_file_by_user(
        &self,
        user_id: i32,
    ) -> Result<Option<(entity::hr_file::Model, entity::user::Model)>, DbErr> {
        let row = entity::prelude::HrFile::find()
            .filter(entity::hr_file::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        match row {
            Some((file, user)) => {
                let user = user.ok_or_else(|| {
                    DbErr::RecordNotFound(format!("Owner of HR file {} not found", file.id))
                })?;
                Ok(Some((file, user)))
            }
            None => Ok(None),
        }
    }

    pub async fn get_all_hr_files(
        &self,
    ) -> Result<Vec<(entity::hr_file::Model, entity::user::Model)>, DbErr> {
        let rows = entity::prelude::HrFile::find()
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        with_owner(rows, "HR file")
    }

    pub async fn create_leave_record(
        &self,
        params: CreateLeaveRecordParams,
    ) -> Result<entity::leave_record::Model, DbErr> {
        entity::leave_record::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            leave_type: ActiveValue::Set(params.leave_type),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            reason: ActiveValue::Set(params.reason),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_leave_records_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<(entity::leave_record::Model, entity::user::Model)>, DbErr> {
        let rows = entity::prelude::LeaveRecord::find()
            .filter(entity::leave_record::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        with_owner(rows, "leave record")
    }

    pub async fn create_timesheet(
        &self,
        params: CreateTimesheetParams,
    ) -> Result<entity::timesheet::Model, DbErr> {
        entity::timesheet::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            date: ActiveValue::Set(params.date),
            hours_worked: ActiveValue::Set(params.hours_worked),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_timesheets_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<(entity::timesheet::Model, entity::user::Model)>, DbErr> {
        let rows = entity::prelude::Timesheet::find()
            .filter(entity::timesheet::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        with_owner(rows, "timesheet")
    }

    pub async fn create_payslip(
        &self,
        params: CreatePayslipParams,
    ) -> Result<entity::payslip::Model, DbErr> {
        entity::payslip::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            date: ActiveValue::Set(params.date),
            amount: ActiveValue::Set(params.amount),
            file_path: ActiveValue::Set(params.file_path),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_payslips_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<(entity::payslip::Model, entity::user::Model)>, DbErr> {
        let rows = entity::prelude::Payslip::find()
            .filter(entity::payslip::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        with_owner(rows, "payslip")
    }

    pub async fn get_all_payslips(
        &self,
    ) -> Result<Vec<(entity::payslip::Model, entity::user::Model)>, DbErr> {
        let rows = entity::prelude::Payslip::find()
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        with_owner(rows, "payslip")
    }

    pub async fn create_performance_review(
        &self,
        params: CreatePerformanceReviewParams,
    ) -> Result<entity::performance_review::Model, DbErr> {
        entity::performance_review::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            date: ActiveValue::Set(params.date),
            review: ActiveValue::Set(params.review),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_performance_reviews_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<(entity::performance_review::Model, entity::user::Model)>, DbErr> {
        let rows = entity::prelude::PerformanceReview::find()
            .filter(entity::performance_review::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        with_owner(rows, "performance review")
    }

    pub async fn get_all_performance_reviews(
        &self,
    ) -> Result<Vec<(entity::performance_review::Model, entity::user::Model)>, DbErr> {
        let rows = entity::prelude::PerformanceReview::find()
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        with_owner(rows, "performance review")
    }

    pub async fn create_expense(
        &self,
        params: CreateExpenseParams,
    ) -> Result<entity::expense::Model, DbErr> {
        entity::expense::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            date: ActiveValue::Set(params.date),
            amount: ActiveValue::Set(params.amount),
            description: ActiveValue::Set(params.description),
            file_path: ActiveValue::Set(params.file_path),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_expenses_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<(entity::expense::Model, entity::user::Model)>, DbErr> {
        let rows = entity::prelude::Expense::find()
            .filter(entity::expense::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        with_owner(rows, "expense")
    }

    pub async fn create_private_note(
        &self,
        params: CreatePrivateNoteParams,
    ) -> Result<entity::private_note::Model, DbErr> {
        entity::private_note::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            date: ActiveValue::Set(params.date),
            note: ActiveValue::Set(params.note),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_private_notes_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<(entity::private_note::Model, entity::user::Model)>, DbErr> {
        let rows = entity::prelude::PrivateNote::find()
            .filter(entity::private_note::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        with_owner(rows, "private note")
    }
}
