//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
///
/// This atomic counter ensures each factory-created entity gets unique
/// identifying fields to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user together with a profile holding the given role.
///
/// # Returns
/// - `Ok((user, profile))` - The created user and profile entities
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user_with_role(
    db: &DatabaseConnection,
    role: entity::user_profile::ProfileRole,
) -> Result<(entity::user::Model, entity::user_profile::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let profile = crate::factory::user_profile::create_profile(db, user.id, role).await?;

    Ok((user, profile))
}
