//! User and profile data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::user::{CreateProfileParams, CreateUserParams};

/// Repository providing database operations for users and their profiles.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user row.
    pub async fn create(&self, params: CreateUserParams) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Fetches all users matching the given ids in one query.
    ///
    /// Callers comparing the result against the requested set detect missing ids.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::user::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find().all(self.db).await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }

    /// Inserts a profile row for an existing user.
    pub async fn create_profile(
        &self,
        params: CreateProfileParams,
    ) -> Result<entity::user_profile::Model, DbErr> {
        entity::user_profile::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            bio: ActiveValue::Set(params.bio),
            profile_picture: ActiveValue::Set(params.profile_picture),
            phone_number: ActiveValue::Set(params.phone_number),
            role: ActiveValue::Set(params.role),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_profile_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::user_profile::Model>, DbErr> {
        entity::prelude::UserProfile::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn find_profile_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::user_profile::Model>, DbErr> {
        entity::prelude::UserProfile::find()
            .filter(entity::user_profile::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Gets all profiles with their owning user resolved.
    pub async fn get_all_profiles(
        &self,
    ) -> Result<Vec<(entity::user_profile::Model, entity::user::Model)>, DbErr> {
        let rows = entity::prelude::UserProfile::find()
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(profile, user)| {
                let user = user.ok_or_else(|| {
                    DbErr::RecordNotFound(format!("Owner of profile {} not found", profile.id))
                })?;
                Ok((profile, user))
            })
            .collect()
    }
}
