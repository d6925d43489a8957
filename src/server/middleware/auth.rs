use entity::user_profile::ProfileRole;
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    controller::auth::SESSION_AUTH_USER_ID,
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
};

/// Access requirement checked against the current user's profile role.
///
/// An `Admin` profile passes every check.
#[derive(Debug)]
pub enum Permission {
    Admin,
    Manager,
    Hr,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session user and checks every listed permission.
    ///
    /// With an empty permission list this only requires a logged-in user.
    /// Role checks load the user's profile; a user without a profile fails
    /// every role-gated check.
    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = self.session.get::<i32>(SESSION_AUTH_USER_ID).await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if permissions.is_empty() {
            return Ok(user);
        }

        let role = user_repo
            .find_profile_by_user_id(user_id)
            .await?
            .map(|profile| profile.role);

        for permission in permissions {
            let allowed = match (permission, role) {
                (_, Some(ProfileRole::Admin)) => true,
                (Permission::Manager, Some(ProfileRole::Manager)) => true,
                (Permission::Hr, Some(ProfileRole::Hr)) => true,
                _ => false,
            };

            if !allowed {
                return Err(AuthError::AccessDenied(
                    user_id,
                    format!("missing required permission {:?}", permission),
                )
                .into());
            }
        }

        Ok(user)
    }
}
