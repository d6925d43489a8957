//! HR record services.
//!
//! Covers both surfaces over the HR record family: the personal endpoints,
//! where the session user owns every record they touch, and the HR-team
//! endpoints, which name the subject user explicitly.

use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{hr::HrRepository, policy::PolicyRepository},
    error::AppError,
    model::hr::{
        CreateExpenseParams, CreateHrFileParams, CreateLeaveRecordParams, CreatePayslipParams,
        CreatePerformanceReviewParams, CreatePolicyParams, CreatePrivateNoteParams,
        CreateTimesheetParams, Expense, HrFile, LeaveRecord, Payslip, PerformanceReview, Policy,
        PrivateNote, Timesheet,
    },
    service::resolve_user,
};

pub struct HrService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HrService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the HR file for a user.
    ///
    /// Each user has at most one HR file; a second create fails validation.
    pub async fn create_hr_file(&self, params: CreateHrFileParams) -> Result<HrFile, AppError> {
        let user = resolve_user(self.db, params.user_id).await?;

        let repo = HrRepository::new(self.db);
        if repo.find_hr_file_by_user(params.user_id).await?.is_some() {
            return Err(AppError::Validation(format!(
                "User {} already has an HR file",
                params.user_id
            )));
        }

        let file = repo.create_hr_file(params).await?;

        Ok(HrFile::from_entity(file, user))
    }

    pub async fn get_hr_file_for_user(&self, user_id: i32) -> Result<HrFile, AppError> {
        let row = HrRepository::new(self.db)
            .find_hr_file_by_user(user_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("No HR file exists for user {}", user_id))
            })?;

        Ok(HrFile::from_entity(row.0, row.1))
    }

    pub async fn get_all_hr_files(&self) -> Result<Vec<HrFile>, AppError> {
        let rows = HrRepository::new(self.db).get_all_hr_files().await?;

        Ok(rows
            .into_iter()
            .map(|(file, user)| HrFile::from_entity(file, user))
            .collect())
    }

    pub async fn create_leave_record(
        &self,
        params: CreateLeaveRecordParams,
    ) -> Result<LeaveRecord, AppError> {
        if params.end_date < params.start_date {
            return Err(AppError::Validation(
                "end_date must not precede start_date".to_string(),
            ));
        }

        let user = resolve_user(self.db, params.user_id).await?;
        let record = HrRepository::new(self.db).create_leave_record(params).await?;

        Ok(LeaveRecord::from_entity(record, user))
    }

    pub async fn get_leave_records_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<LeaveRecord>, AppError> {
        let rows = HrRepository::new(self.db)
            .get_leave_records_by_user(user_id)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(record, user)| LeaveRecord::from_entity(record, user))
            .collect())
    }

    pub async fn create_timesheet(
        &self,
        params: CreateTimesheetParams,
    ) -> Result<Timesheet, AppError> {
        if params.hours_worked < Decimal::ZERO {
            return Err(AppError::Validation(
                "hours_worked must not be negative".to_string(),
            ));
        }

        let user = resolve_user(self.db, params.user_id).await?;
        let timesheet = HrRepository::new(self.db).create_timesheet(params).await?;

        Ok(Timesheet::from_entity(timesheet, user))
    }

    pub async fn get_timesheets_for_user(&self, user_id: i32) -> Result<Vec<Timesheet>, AppError> {
        let rows = HrRepository::new(self.db)
            .get_timesheets_by_user(user_id)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(timesheet, user)| Timesheet::from_entity(timesheet, user))
            .collect())
    }

    pub async fn create_payslip(&self, params: CreatePayslipParams) -> Result<Payslip, AppError> {
        let user = resolve_user(self.db, params.user_id).await?;
        let payslip = HrRepository::new(self.db).create_payslip(params).await?;

        Ok(Payslip::from_entity(payslip, user))
    }

    pub async fn get_payslips_for_user(&self, user_id: i32) -> Result<Vec<Payslip>, AppError> {
        let rows = HrRepository::new(self.db)
            .get_payslips_by_user(user_id)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(payslip, user)| Payslip::from_entity(payslip, user))
            .collect())
    }

    pub async fn get_all_payslips(&self) -> Result<Vec<Payslip>, AppError> {
        let rows = HrRepository::new(self.db).get_all_payslips().await?;

        Ok(rows
            .into_iter()
            .map(|(payslip, user)| Payslip::from_entity(payslip, user))
            .collect())
    }

    pub async fn create_performance_review(
        &self,
        params: CreatePerformanceReviewParams,
    ) -> Result<PerformanceReview, AppError> {
        let user = resolve_user(self.db, params.user_id).await?;
        let review = HrRepository::new(self.db)
            .create_performance_review(params)
            .await?;

        Ok(PerformanceReview::from_entity(review, user))
    }

    pub async fn get_performance_reviews_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<PerformanceReview>, AppError> {
        let rows = HrRepository::new(self.db)
            .get_performance_reviews_by_user(user_id)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(review, user)| PerformanceReview::from_entity(review, user))
            .collect())
    }

    pub async fn get_all_performance_reviews(&self) -> Result<Vec<PerformanceReview>, AppError> {
        let rows = HrRepository::new(self.db)
            .get_all_performance_reviews()
            .await?;

        Ok(rows
            .into_iter()
            .map(|(review, user)| PerformanceReview::from_entity(review, user))
            .collect())
    }

    pub async fn create_expense(&self, params: CreateExpenseParams) -> Result<Expense, AppError> {
        if params.amount < Decimal::ZERO {
            return Err(AppError::Validation(
                "amount must not be negative".to_string(),
            ));
        }

        let user = resolve_user(self.db, params.user_id).await?;
        let expense = HrRepository::new(self.db).create_expense(params).await?;

        Ok(Expense::from_entity(expense, user))
    }

    pub async fn get_expenses_for_user(&self, user_id: i32) -> Result<Vec<Expense>, AppError> {
        let rows = HrRepository::new(self.db)
            .get_expenses_by_user(user_id)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(expense, user)| Expense::from_entity(expense, user))
            .collect())
    }

    pub async fn create_private_note(
        &self,
        params: CreatePrivateNoteParams,
    ) -> Result<PrivateNote, AppError> {
        let user = resolve_user(self.db, params.user_id).await?;
        let note = HrRepository::new(self.db).create_private_note(params).await?;

        Ok(PrivateNote::from_entity(note, user))
    }

    pub async fn get_private_notes_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<PrivateNote>, AppError> {
        let rows = HrRepository::new(self.db)
            .get_private_notes_by_user(user_id)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(note, user)| PrivateNote::from_entity(note, user))
            .collect())
    }

    pub async fn create_policy(&self, params: CreatePolicyParams) -> Result<Policy, AppError> {
        let policy = PolicyRepository::new(self.db).create(params).await?;

        Ok(Policy::from_entity(policy))
    }

    pub async fn get_policies(&self) -> Result<Vec<Policy>, AppError> {
        let policies = PolicyRepository::new(self.db).get_all().await?;

        Ok(policies.into_iter().map(Policy::from_entity).collect())
    }
}
