use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        task::{CreateTaskDto, TaskDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::task::{CreateTaskParams, Task},
        service::task::TaskService,
        state::AppState,
    },
};

/// Tag for grouping task endpoints in OpenAPI documentation
pub static TASK_TAG: &str = "task";

/// List all tasks.
#[utoipa::path(
    get,
    path = "/api/tasks",
    tag = TASK_TAG,
    responses(
        (status = 200, description = "All tasks", body = Vec<TaskDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_tasks(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let tasks = TaskService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(tasks.into_iter().map(Task::into_dto).collect::<Vec<_>>()),
    ))
}

/// Create a task assigned to an existing user.
#[utoipa::path(
    post,
    path = "/api/tasks",
    tag = TASK_TAG,
    request_body = CreateTaskDto,
    responses(
        (status = 201, description = "Created task", body = TaskDto),
        (status = 404, description = "Assignee not found", body = ErrorDto)
    ),
)]
pub async fn create_task(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateTaskDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let task = TaskService::new(&state.db)
        .create(CreateTaskParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(task.into_dto())))
}
