use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        okr::{
            CreateObjectiveDto, CreateOkrTaskDto, ObjectiveDto, OkrDashboardDto, OkrTaskDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::okr::{CreateObjectiveParams, CreateOkrTaskParams, Objective, OkrTask},
        service::okr::OkrService,
        state::AppState,
    },
};

/// Tag for grouping OKR endpoints in OpenAPI documentation
pub static OKR_TAG: &str = "okr";

/// Get aggregate OKR counts.
#[utoipa::path(
    get,
    path = "/api/okr/dashboard",
    tag = OKR_TAG,
    responses(
        (status = 200, description = "OKR aggregates", body = OkrDashboardDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_okr_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let dashboard = OkrService::new(&state.db).dashboard().await?;

    Ok((StatusCode::OK, Json(dashboard.into_dto())))
}

/// List all objectives.
#[utoipa::path(
    get,
    path = "/api/okr/objectives",
    tag = OKR_TAG,
    responses(
        (status = 200, description = "All objectives", body = Vec<ObjectiveDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_objectives(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let objectives = OkrService::new(&state.db).get_objectives().await?;

    Ok((
        StatusCode::OK,
        Json(
            objectives
                .into_iter()
                .map(Objective::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create an objective owned by an existing user.
#[utoipa::path(
    post,
    path = "/api/okr/objectives",
    tag = OKR_TAG,
    request_body = CreateObjectiveDto,
    responses(
        (status = 201, description = "Created objective", body = ObjectiveDto),
        (status = 404, description = "Owner not found", body = ErrorDto)
    ),
)]
pub async fn create_objective(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateObjectiveDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let objective = OkrService::new(&state.db)
        .create_objective(CreateObjectiveParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(objective.into_dto())))
}

/// List all OKR tasks.
#[utoipa::path(
    get,
    path = "/api/okr/tasks",
    tag = OKR_TAG,
    responses(
        (status = 200, description = "All OKR tasks", body = Vec<OkrTaskDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_okr_tasks(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let tasks = OkrService::new(&state.db).get_tasks().await?;

    Ok((
        StatusCode::OK,
        Json(
            tasks
                .into_iter()
                .map(OkrTask::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create an OKR task under an existing objective.
#[utoipa::path(
    post,
    path = "/api/okr/tasks",
    tag = OKR_TAG,
    request_body = CreateOkrTaskDto,
    responses(
        (status = 201, description = "Created OKR task", body = OkrTaskDto),
        (status = 404, description = "Objective or assignee not found", body = ErrorDto)
    ),
)]
pub async fn create_okr_task(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateOkrTaskDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let task = OkrService::new(&state.db)
        .create_task(CreateOkrTaskParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(task.into_dto())))
}
