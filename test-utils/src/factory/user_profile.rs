use entity::user_profile::ProfileRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a profile for an existing user with the given role.
///
/// Text fields default to empty, matching the API's optional-field defaults.
pub async fn create_profile(
    db: &DatabaseConnection,
    user_id: i32,
    role: ProfileRole,
) -> Result<entity::user_profile::Model, DbErr> {
    entity::user_profile::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        bio: ActiveValue::Set(String::new()),
        profile_picture: ActiveValue::Set(None),
        phone_number: ActiveValue::Set(String::new()),
        role: ActiveValue::Set(role),
        ..Default::default()
    }
    .insert(db)
    .await
}
