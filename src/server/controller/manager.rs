//! Manager endpoints: team-wide views over users and tasks.
//!
//! All endpoints require the manager role (or admin).

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, manager::ManagerDashboardDto, task::TaskDto, user::UserDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{task::Task, user::User},
        service::{manager::ManagerService, task::TaskService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping manager endpoints in OpenAPI documentation
pub static MANAGER_TAG: &str = "manager";

/// Get team size and task counts.
///
/// # Access Control
/// - `Manager`
#[utoipa::path(
    get,
    path = "/api/manager/dashboard",
    tag = MANAGER_TAG,
    responses(
        (status = 200, description = "Manager aggregates", body = ManagerDashboardDto),
        (status = 403, description = "Not a manager", body = ErrorDto)
    ),
)]
pub async fn get_manager_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Manager])
        .await?;

    let dashboard = ManagerService::new(&state.db).dashboard().await?;

    Ok((StatusCode::OK, Json(dashboard.into_dto())))
}

/// List all team members.
///
/// # Access Control
/// - `Manager`
#[utoipa::path(
    get,
    path = "/api/manager/team_members",
    tag = MANAGER_TAG,
    responses(
        (status = 200, description = "Team members", body = Vec<UserDto>),
        (status = 403, description = "Not a manager", body = ErrorDto)
    ),
)]
pub async fn get_team_members(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Manager])
        .await?;

    let users = UserService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(users.into_iter().map(User::into_dto).collect::<Vec<_>>()),
    ))
}

/// List every task across the team.
///
/// # Access Control
/// - `Manager`
#[utoipa::path(
    get,
    path = "/api/manager/team_tasks",
    tag = MANAGER_TAG,
    responses(
        (status = 200, description = "Team tasks", body = Vec<TaskDto>),
        (status = 403, description = "Not a manager", body = ErrorDto)
    ),
)]
pub async fn get_team_tasks(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Manager])
        .await?;

    let tasks = TaskService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(tasks.into_iter().map(Task::into_dto).collect::<Vec<_>>()),
    ))
}
