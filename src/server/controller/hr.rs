//! HR endpoints: policies, employee records, payroll, and reviews.
//!
//! Reads and writes here operate across all users and require the HR role
//! (or admin). Policies are readable by any logged-in user.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        hr::{
            CreateHrFileDto, CreatePayslipDto, CreatePerformanceReviewDto, CreatePolicyDto,
            HrFileDto, PayslipDto, PerformanceReviewDto, PolicyDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::hr::{
            CreateHrFileParams, CreatePayslipParams, CreatePerformanceReviewParams,
            CreatePolicyParams, HrFile, Payslip, PerformanceReview, Policy,
        },
        service::hr::HrService,
        state::AppState,
    },
};

/// Tag for grouping HR endpoints in OpenAPI documentation
pub static HR_TAG: &str = "hr";

/// List all company policies.
#[utoipa::path(
    get,
    path = "/api/hr/policies",
    tag = HR_TAG,
    responses(
        (status = 200, description = "All policies", body = Vec<PolicyDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_policies(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let policies = HrService::new(&state.db).get_policies().await?;

    Ok((
        StatusCode::OK,
        Json(
            policies
                .into_iter()
                .map(Policy::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Publish a company policy.
///
/// # Access Control
/// - `Hr`
#[utoipa::path(
    post,
    path = "/api/hr/policies",
    tag = HR_TAG,
    request_body = CreatePolicyDto,
    responses(
        (status = 201, description = "Created policy", body = PolicyDto),
        (status = 403, description = "Not HR", body = ErrorDto)
    ),
)]
pub async fn create_policy(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreatePolicyDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Hr])
        .await?;

    let policy = HrService::new(&state.db)
        .create_policy(CreatePolicyParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(policy.into_dto())))
}

/// List every employee's HR file.
///
/// # Access Control
/// - `Hr`
#[utoipa::path(
    get,
    path = "/api/hr/employee_records",
    tag = HR_TAG,
    responses(
        (status = 200, description = "All HR files", body = Vec<HrFileDto>),
        (status = 403, description = "Not HR", body = ErrorDto)
    ),
)]
pub async fn get_employee_records(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Hr])
        .await?;

    let files = HrService::new(&state.db).get_all_hr_files().await?;

    Ok((
        StatusCode::OK,
        Json(files.into_iter().map(HrFile::into_dto).collect::<Vec<_>>()),
    ))
}

/// Open an HR file for an employee.
///
/// # Access Control
/// - `Hr`
#[utoipa::path(
    post,
    path = "/api/hr/employee_records",
    tag = HR_TAG,
    request_body = CreateHrFileDto,
    responses(
        (status = 201, description = "Created HR file", body = HrFileDto),
        (status = 400, description = "User already has an HR file", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn create_employee_record(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateHrFileDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Hr])
        .await?;

    let file = HrService::new(&state.db)
        .create_hr_file(CreateHrFileParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(file.into_dto())))
}

/// List every payslip across the company.
///
/// # Access Control
/// - `Hr`
#[utoipa::path(
    get,
    path = "/api/hr/payroll_records",
    tag = HR_TAG,
    responses(
        (status = 200, description = "All payslips", body = Vec<PayslipDto>),
        (status = 403, description = "Not HR", body = ErrorDto)
    ),
)]
pub async fn get_payroll_records(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Hr])
        .await?;

    let payslips = HrService::new(&state.db).get_all_payslips().await?;

    Ok((
        StatusCode::OK,
        Json(
            payslips
                .into_iter()
                .map(Payslip::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Issue a payslip to an employee.
///
/// # Access Control
/// - `Hr`
#[utoipa::path(
    post,
    path = "/api/hr/payroll_records",
    tag = HR_TAG,
    request_body = CreatePayslipDto,
    responses(
        (status = 201, description = "Created payslip", body = PayslipDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn create_payroll_record(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreatePayslipDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Hr])
        .await?;

    let payslip = HrService::new(&state.db)
        .create_payslip(CreatePayslipParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(payslip.into_dto())))
}

/// List every performance review across the company.
///
/// # Access Control
/// - `Hr`
#[utoipa::path(
    get,
    path = "/api/hr/performance_reviews",
    tag = HR_TAG,
    responses(
        (status = 200, description = "All reviews", body = Vec<PerformanceReviewDto>),
        (status = 403, description = "Not HR", body = ErrorDto)
    ),
)]
pub async fn get_hr_performance_reviews(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Hr])
        .await?;

    let reviews = HrService::new(&state.db).get_all_performance_reviews().await?;

    Ok((
        StatusCode::OK,
        Json(
            reviews
                .into_iter()
                .map(PerformanceReview::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// File a performance review for an employee.
///
/// # Access Control
/// - `Hr`
#[utoipa::path(
    post,
    path = "/api/hr/performance_reviews",
    tag = HR_TAG,
    request_body = CreatePerformanceReviewDto,
    responses(
        (status = 201, description = "Created review", body = PerformanceReviewDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn create_hr_performance_review(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreatePerformanceReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Hr])
        .await?;

    let review = HrService::new(&state.db)
        .create_performance_review(CreatePerformanceReviewParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(review.into_dto())))
}
