use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        org::{CreateDepartmentDto, CreateRoleDto, DepartmentDto, RoleDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::org::{CreateDepartmentParams, CreateRoleParams, Department, Role},
        service::org::OrgService,
        state::AppState,
    },
};

/// Tag for grouping department/role endpoints in OpenAPI documentation
pub static ORG_TAG: &str = "org";

/// List all departments.
#[utoipa::path(
    get,
    path = "/api/departments",
    tag = ORG_TAG,
    responses(
        (status = 200, description = "All departments", body = Vec<DepartmentDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_departments(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let departments = OrgService::new(&state.db).get_departments().await?;

    Ok((
        StatusCode::OK,
        Json(
            departments
                .into_iter()
                .map(Department::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create a department.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/departments",
    tag = ORG_TAG,
    request_body = CreateDepartmentDto,
    responses(
        (status = 201, description = "Created department", body = DepartmentDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn create_department(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateDepartmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let department = OrgService::new(&state.db)
        .create_department(CreateDepartmentParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(department.into_dto())))
}

/// List all roles with their departments and members.
#[utoipa::path(
    get,
    path = "/api/roles",
    tag = ORG_TAG,
    responses(
        (status = 200, description = "All roles", body = Vec<RoleDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_roles(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let roles = OrgService::new(&state.db).get_roles().await?;

    Ok((
        StatusCode::OK,
        Json(roles.into_iter().map(Role::into_dto).collect::<Vec<_>>()),
    ))
}

/// Create a role in a department with an initial member set.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/roles",
    tag = ORG_TAG,
    request_body = CreateRoleDto,
    responses(
        (status = 201, description = "Created role", body = RoleDto),
        (status = 404, description = "Department or member not found", body = ErrorDto)
    ),
)]
pub async fn create_role(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let role = OrgService::new(&state.db)
        .create_role(CreateRoleParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(role.into_dto())))
}
