use crate::server::data::okr::OkrRepository;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod counts;
mod objectives;
