//! Personal endpoints: records scoped to the logged-in user.
//!
//! Every handler resolves the session user first and queries or creates rows
//! owned by that user only. Create bodies never carry an owner id.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        hr::{
            CreateExpenseDto, CreateLeaveRecordDto, CreatePrivateNoteDto, CreateTimesheetDto,
            ExpenseDto, HrFileDto, LeaveRecordDto, PayslipDto, PerformanceReviewDto,
            PrivateNoteDto, TimesheetDto,
        },
        task::TaskDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            hr::{
                CreateExpenseParams, CreateLeaveRecordParams, CreatePrivateNoteParams,
                CreateTimesheetParams, Expense, LeaveRecord, PrivateNote, Timesheet,
            },
            task::Task,
        },
        service::{hr::HrService, task::TaskService},
        state::AppState,
    },
};

/// Tag for grouping personal endpoints in OpenAPI documentation
pub static PERSONAL_TAG: &str = "personal";

/// List tasks assigned to the current user.
#[utoipa::path(
    get,
    path = "/api/personal/tasks",
    tag = PERSONAL_TAG,
    responses(
        (status = 200, description = "Current user's tasks", body = Vec<TaskDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_personal_tasks(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let tasks = TaskService::new(&state.db).get_for_user(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(tasks.into_iter().map(Task::into_dto).collect::<Vec<_>>()),
    ))
}

/// Get the current user's HR file.
#[utoipa::path(
    get,
    path = "/api/personal/hr_file",
    tag = PERSONAL_TAG,
    responses(
        (status = 200, description = "Current user's HR file", body = HrFileDto),
        (status = 404, description = "No HR file exists", body = ErrorDto)
    ),
)]
pub async fn get_personal_hr_file(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let file = HrService::new(&state.db).get_hr_file_for_user(user.id).await?;

    Ok((StatusCode::OK, Json(file.into_dto())))
}

/// List the current user's leave records.
#[utoipa::path(
    get,
    path = "/api/personal/leave_records",
    tag = PERSONAL_TAG,
    responses(
        (status = 200, description = "Current user's leave records", body = Vec<LeaveRecordDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_personal_leave_records(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let records = HrService::new(&state.db)
        .get_leave_records_for_user(user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            records
                .into_iter()
                .map(LeaveRecord::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Request leave for the current user.
#[utoipa::path(
    post,
    path = "/api/personal/leave_records",
    tag = PERSONAL_TAG,
    request_body = CreateLeaveRecordDto,
    responses(
        (status = 201, description = "Created leave record", body = LeaveRecordDto),
        (status = 400, description = "Invalid date range", body = ErrorDto)
    ),
)]
pub async fn create_personal_leave_record(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateLeaveRecordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let record = HrService::new(&state.db)
        .create_leave_record(CreateLeaveRecordParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(record.into_dto())))
}

/// List the current user's timesheets.
#[utoipa::path(
    get,
    path = "/api/personal/timesheets",
    tag = PERSONAL_TAG,
    responses(
        (status = 200, description = "Current user's timesheets", body = Vec<TimesheetDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_personal_timesheets(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let timesheets = HrService::new(&state.db)
        .get_timesheets_for_user(user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            timesheets
                .into_iter()
                .map(Timesheet::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Log hours for the current user.
#[utoipa::path(
    post,
    path = "/api/personal/timesheets",
    tag = PERSONAL_TAG,
    request_body = CreateTimesheetDto,
    responses(
        (status = 201, description = "Created timesheet", body = TimesheetDto),
        (status = 400, description = "Invalid hours", body = ErrorDto)
    ),
)]
pub async fn create_personal_timesheet(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateTimesheetDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let timesheet = HrService::new(&state.db)
        .create_timesheet(CreateTimesheetParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(timesheet.into_dto())))
}

/// List the current user's payslips.
#[utoipa::path(
    get,
    path = "/api/personal/payslips",
    tag = PERSONAL_TAG,
    responses(
        (status = 200, description = "Current user's payslips", body = Vec<PayslipDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_personal_payslips(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let payslips = HrService::new(&state.db)
        .get_payslips_for_user(user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            payslips
                .into_iter()
                .map(|payslip| payslip.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// List the current user's performance reviews.
#[utoipa::path(
    get,
    path = "/api/personal/performance_reviews",
    tag = PERSONAL_TAG,
    responses(
        (status = 200, description = "Current user's reviews", body = Vec<PerformanceReviewDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_personal_performance_reviews(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reviews = HrService::new(&state.db)
        .get_performance_reviews_for_user(user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            reviews
                .into_iter()
                .map(|review| review.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// List the current user's expenses.
#[utoipa::path(
    get,
    path = "/api/personal/expenses",
    tag = PERSONAL_TAG,
    responses(
        (status = 200, description = "Current user's expenses", body = Vec<ExpenseDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_personal_expenses(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let expenses = HrService::new(&state.db)
        .get_expenses_for_user(user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            expenses
                .into_iter()
                .map(Expense::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Submit an expense for the current user.
#[utoipa::path(
    post,
    path = "/api/personal/expenses",
    tag = PERSONAL_TAG,
    request_body = CreateExpenseDto,
    responses(
        (status = 201, description = "Created expense", body = ExpenseDto),
        (status = 400, description = "Invalid amount", body = ErrorDto)
    ),
)]
pub async fn create_personal_expense(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateExpenseDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let expense = HrService::new(&state.db)
        .create_expense(CreateExpenseParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(expense.into_dto())))
}

/// List the current user's private notes.
#[utoipa::path(
    get,
    path = "/api/personal/private_notes",
    tag = PERSONAL_TAG,
    responses(
        (status = 200, description = "Current user's notes", body = Vec<PrivateNoteDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_personal_private_notes(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let notes = HrService::new(&state.db)
        .get_private_notes_for_user(user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            notes
                .into_iter()
                .map(PrivateNote::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Add a private note for the current user.
#[utoipa::path(
    post,
    path = "/api/personal/private_notes",
    tag = PERSONAL_TAG,
    request_body = CreatePrivateNoteDto,
    responses(
        (status = 201, description = "Created note", body = PrivateNoteDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn create_personal_private_note(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreatePrivateNoteDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let note = HrService::new(&state.db)
        .create_private_note(CreatePrivateNoteParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(note.into_dto())))
}
