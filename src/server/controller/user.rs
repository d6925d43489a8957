use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateProfileDto, CreateUserDto, ProfileDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{CreateProfileParams, CreateUserParams, Profile, User},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List all users.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let users = UserService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(users.into_iter().map(User::into_dto).collect::<Vec<_>>()),
    ))
}

/// Create a new user.
///
/// # Access Control
/// - `Admin` - Only admins can create users
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Created user", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .create(CreateUserParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Get a single user by id.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let user = UserService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// List all user profiles with their owning users.
#[utoipa::path(
    get,
    path = "/api/profiles",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All profiles", body = Vec<ProfileDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_profiles(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let profiles = UserService::new(&state.db).get_all_profiles().await?;

    Ok((
        StatusCode::OK,
        Json(
            profiles
                .into_iter()
                .map(Profile::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create a profile for an existing user.
///
/// # Access Control
/// - `Admin` - Only admins can create profiles
#[utoipa::path(
    post,
    path = "/api/profiles",
    tag = USER_TAG,
    request_body = CreateProfileDto,
    responses(
        (status = 201, description = "Created profile", body = ProfileDto),
        (status = 400, description = "User already has a profile", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn create_profile(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let profile = UserService::new(&state.db)
        .create_profile(CreateProfileParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(profile.into_dto())))
}
