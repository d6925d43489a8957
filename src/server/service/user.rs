use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateProfileParams, CreateUserParams, Profile, User},
    service::resolve_user,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        if params.username.trim().is_empty() {
            return Err(AppError::Validation("username must not be empty".to_string()));
        }

        let repo = UserRepository::new(self.db);
        let user = repo.create(params).await?;

        Ok(User::from_entity(user))
    }

    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let repo = UserRepository::new(self.db);
        let users = repo.get_all().await?;

        Ok(users.into_iter().map(User::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        let user = resolve_user(self.db, id).await?;

        Ok(User::from_entity(user))
    }

    /// Creates a profile for an existing user.
    ///
    /// Fails with `NotFound` if the user does not exist and `Validation` if
    /// the user already has a profile.
    pub async fn create_profile(&self, params: CreateProfileParams) -> Result<Profile, AppError> {
        let user = resolve_user(self.db, params.user_id).await?;

        let repo = UserRepository::new(self.db);
        if repo.find_profile_by_user_id(params.user_id).await?.is_some() {
            return Err(AppError::Validation(format!(
                "User {} already has a profile",
                params.user_id
            )));
        }

        let profile = repo.create_profile(params).await?;

        Ok(Profile::from_entity(profile, user))
    }

    pub async fn get_all_profiles(&self) -> Result<Vec<Profile>, AppError> {
        let repo = UserRepository::new(self.db);
        let rows = repo.get_all_profiles().await?;

        Ok(rows
            .into_iter()
            .map(|(profile, user)| Profile::from_entity(profile, user))
            .collect())
    }
}
