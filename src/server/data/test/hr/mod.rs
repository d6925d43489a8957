use crate::server::{
    data::hr::HrRepository,
    model::hr::{CreateHrFileParams, CreateTimesheetParams},
};
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod records;
