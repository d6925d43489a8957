use sea_orm_migration::{prelude::*, schema::*};

use super::m20260210_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Every HR record table carries the same cascading owner reference.
fn owner_fk<T, C>(name: &str, table: T, column: C) -> ForeignKeyCreateStatement
where
    T: IntoTableRef,
    C: IdenList,
{
    ForeignKey::create()
        .name(name)
        .from(table, column)
        .to(User::Table, User::Id)
        .on_delete(ForeignKeyAction::Cascade)
        .on_update(ForeignKeyAction::Cascade)
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HrFile::Table)
                    .if_not_exists()
                    .col(pk_auto(HrFile::Id))
                    .col(integer_uniq(HrFile::UserId))
                    .col(json(HrFile::Data))
                    .foreign_key(&mut owner_fk(
                        "fk_hr_file_user_id",
                        HrFile::Table,
                        HrFile::UserId,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LeaveRecord::Table)
                    .if_not_exists()
                    .col(pk_auto(LeaveRecord::Id))
                    .col(integer(LeaveRecord::UserId))
                    .col(string_len(LeaveRecord::LeaveType, 50))
                    .col(date(LeaveRecord::StartDate))
                    .col(date(LeaveRecord::EndDate))
                    .col(text(LeaveRecord::Reason).default(""))
                    .foreign_key(&mut owner_fk(
                        "fk_leave_record_user_id",
                        LeaveRecord::Table,
                        LeaveRecord::UserId,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Timesheet::Table)
                    .if_not_exists()
                    .col(pk_auto(Timesheet::Id))
                    .col(integer(Timesheet::UserId))
                    .col(date(Timesheet::Date))
                    .col(decimal_len(Timesheet::HoursWorked, 5, 2))
                    .foreign_key(&mut owner_fk(
                        "fk_timesheet_user_id",
                        Timesheet::Table,
                        Timesheet::UserId,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Payslip::Table)
                    .if_not_exists()
                    .col(pk_auto(Payslip::Id))
                    .col(integer(Payslip::UserId))
                    .col(date(Payslip::Date))
                    .col(decimal_len(Payslip::Amount, 10, 2))
                    .col(string(Payslip::FilePath))
                    .foreign_key(&mut owner_fk(
                        "fk_payslip_user_id",
                        Payslip::Table,
                        Payslip::UserId,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PerformanceReview::Table)
                    .if_not_exists()
                    .col(pk_auto(PerformanceReview::Id))
                    .col(integer(PerformanceReview::UserId))
                    .col(date(PerformanceReview::Date))
                    .col(text(PerformanceReview::Review))
                    .foreign_key(&mut owner_fk(
                        "fk_performance_review_user_id",
                        PerformanceReview::Table,
                        PerformanceReview::UserId,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Expense::Table)
                    .if_not_exists()
                    .col(pk_auto(Expense::Id))
                    .col(integer(Expense::UserId))
                    .col(date(Expense::Date))
                    .col(decimal_len(Expense::Amount, 10, 2))
                    .col(text(Expense::Description).default(""))
                    .col(string_null(Expense::FilePath))
                    .foreign_key(&mut owner_fk(
                        "fk_expense_user_id",
                        Expense::Table,
                        Expense::UserId,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PrivateNote::Table)
                    .if_not_exists()
                    .col(pk_auto(PrivateNote::Id))
                    .col(integer(PrivateNote::UserId))
                    .col(date(PrivateNote::Date))
                    .col(text(PrivateNote::Note))
                    .foreign_key(&mut owner_fk(
                        "fk_private_note_user_id",
                        PrivateNote::Table,
                        PrivateNote::UserId,
                    ))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PrivateNote::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Expense::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PerformanceReview::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Payslip::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Timesheet::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LeaveRecord::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(HrFile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HrFile {
    Table,
    Id,
    UserId,
    Data,
}

#[derive(DeriveIden)]
pub enum LeaveRecord {
    Table,
    Id,
    UserId,
    LeaveType,
    StartDate,
    EndDate,
    Reason,
}

#[derive(DeriveIden)]
pub enum Timesheet {
    Table,
    Id,
    UserId,
    Date,
    HoursWorked,
}

#[derive(DeriveIden)]
pub enum Payslip {
    Table,
    Id,
    UserId,
    Date,
    Amount,
    FilePath,
}

#[derive(DeriveIden)]
pub enum PerformanceReview {
    Table,
    Id,
    UserId,
    Date,
    Review,
}

#[derive(DeriveIden)]
pub enum Expense {
    Table,
    Id,
    UserId,
    Date,
    Amount,
    Description,
    FilePath,
}

#[derive(DeriveIden)]
pub enum PrivateNote {
    Table,
    Id,
    UserId,
    Date,
    Note,
}
