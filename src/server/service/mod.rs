//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository)
//! layer. They own the rules the storage layer cannot express on its own:
//!
//! - **Reference resolution**: every user/objective/department id named by a
//!   request is resolved to an existing row before anything is inserted, so a
//!   dangling reference aborts with `NotFound` and zero rows written
//! - **Invariant validation**: time ranges and one-per-user constraints are
//!   checked before any write
//! - **Domain models**: services return domain models, never entity models
//!   or DTOs

pub mod calendar;
pub mod client;
pub mod document;
pub mod hr;
pub mod manager;
pub mod meeting;
pub mod okr;
pub mod org;
pub mod task;
pub mod user;

#[cfg(test)]
mod test;

use sea_orm::DatabaseConnection;
use std::collections::HashSet;

use crate::server::{data::user::UserRepository, error::AppError};

/// Resolves a referenced user id to an existing row.
///
/// # Returns
/// - `Ok(Model)` - The referenced user
/// - `Err(AppError::NotFound)` - No user with that id exists
pub(crate) async fn resolve_user(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::user::Model, AppError> {
    UserRepository::new(db)
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))
}

/// Resolves a batch of referenced user ids in one query.
///
/// The first id with no matching row is named in the error.
///
/// # Returns
/// - `Ok(())` - Every id resolves to an existing user
/// - `Err(AppError::NotFound)` - At least one id has no matching user
pub(crate) async fn resolve_users(
    db: &DatabaseConnection,
    user_ids: &[i32],
) -> Result<(), AppError> {
    if user_ids.is_empty() {
        return Ok(());
    }

    let found: HashSet<i32> = UserRepository::new(db)
        .find_by_ids(user_ids)
        .await?
        .into_iter()
        .map(|user| user.id)
        .collect();

    if let Some(missing) = user_ids.iter().find(|id| !found.contains(id)) {
        return Err(AppError::NotFound(format!("User {} not found", missing)));
    }

    Ok(())
}
