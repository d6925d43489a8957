use crate::server::{data::org::OrgRepository, model::org::CreateRoleParams};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod roles;
