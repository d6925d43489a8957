use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Closed set of roles a user profile can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProfileRoleDto {
    Admin,
    Customer,
    Manager,
    Hr,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserDto {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProfileDto {
    pub id: i32,
    pub user: UserDto,
    pub bio: String,
    pub profile_picture: Option<String>,
    pub phone_number: String,
    pub role: ProfileRoleDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateProfileDto {
    pub user_id: i32,
    #[serde(default)]
    pub bio: String,
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub phone_number: String,
    pub role: ProfileRoleDto,
}

/// Body for the identity shim login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub user_id: i32,
}
