use crate::server::{
    data::user::UserRepository,
    model::user::{CreateProfileParams, CreateUserParams},
};
use entity::user_profile::ProfileRole;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod profiles;
