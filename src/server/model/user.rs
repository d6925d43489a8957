//! User and profile domain models and parameters.

use entity::user_profile::ProfileRole;

use crate::model::user::{CreateProfileDto, CreateUserDto, ProfileDto, ProfileRoleDto, UserDto};

impl From<ProfileRoleDto> for ProfileRole {
    fn from(role: ProfileRoleDto) -> Self {
        match role {
            ProfileRoleDto::Admin => ProfileRole::Admin,
            ProfileRoleDto::Customer => ProfileRole::Customer,
            ProfileRoleDto::Manager => ProfileRole::Manager,
            ProfileRoleDto::Hr => ProfileRole::Hr,
        }
    }
}

impl From<ProfileRole> for ProfileRoleDto {
    fn from(role: ProfileRole) -> Self {
        match role {
            ProfileRole::Admin => ProfileRoleDto::Admin,
            ProfileRole::Customer => ProfileRoleDto::Customer,
            ProfileRole::Manager => ProfileRoleDto::Manager,
            ProfileRole::Hr => ProfileRoleDto::Hr,
        }
    }
}

/// Application user identity.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
        }
    }
}

/// Parameters for creating a new user.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
}

impl CreateUserParams {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            username: dto.username,
            email: dto.email,
        }
    }
}

/// User profile with its owning user resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: i32,
    pub user: User,
    pub bio: String,
    pub profile_picture: Option<String>,
    pub phone_number: String,
    pub role: ProfileRole,
}

impl Profile {
    pub fn from_entity(profile: entity::user_profile::Model, user: entity::user::Model) -> Self {
        Self {
            id: profile.id,
            user: User::from_entity(user),
            bio: profile.bio,
            profile_picture: profile.profile_picture,
            phone_number: profile.phone_number,
            role: profile.role,
        }
    }

    pub fn into_dto(self) -> ProfileDto {
        ProfileDto {
            id: self.id,
            user: self.user.into_dto(),
            bio: self.bio,
            profile_picture: self.profile_picture,
            phone_number: self.phone_number,
            role: self.role.into(),
        }
    }
}

/// Parameters for creating a user profile.
#[derive(Debug, Clone)]
pub struct CreateProfileParams {
    pub user_id: i32,
    pub bio: String,
    pub profile_picture: Option<String>,
    pub phone_number: String,
    pub role: ProfileRole,
}

impl CreateProfileParams {
    pub fn from_dto(dto: CreateProfileDto) -> Self {
        Self {
            user_id: dto.user_id,
            bio: dto.bio,
            profile_picture: dto.profile_picture,
            phone_number: dto.phone_number,
            role: dto.role.into(),
        }
    }
}
