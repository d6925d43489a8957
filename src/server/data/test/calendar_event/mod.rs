use crate::server::{
    data::calendar_event::CalendarEventRepository,
    model::calendar::CreateCalendarEventParams,
};
use chrono::{Duration, Utc};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
