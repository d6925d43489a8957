use crate::server::{data::task::TaskRepository, model::task::CreateTaskParams};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_assignee;
