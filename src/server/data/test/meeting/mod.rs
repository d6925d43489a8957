use crate::server::{data::meeting::MeetingRepository, model::meeting::CreateMeetingParams};
use chrono::{Duration, Utc};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
