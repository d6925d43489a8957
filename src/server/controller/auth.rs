//! Identity shim endpoints.
//!
//! Real single sign-on lives outside this service. These endpoints validate a
//! user id against the database and keep it in the server-side session; every
//! protected endpoint resolves the current user from that session entry.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, UserDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::user::User,
        service::user::UserService, state::AppState,
    },
};

/// Session key holding the authenticated user's id.
pub static SESSION_AUTH_USER_ID: &str = "auth:user_id";

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in as an existing user.
///
/// Validates that the user exists and stores its id in the session.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).get_by_id(payload.user_id).await?;

    session.insert(SESSION_AUTH_USER_ID, user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Get the currently logged-in user.
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(User::from_entity(user).into_dto())))
}

/// Log out and clear the session.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out")
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    session.flush().await?;

    Ok(StatusCode::NO_CONTENT)
}
