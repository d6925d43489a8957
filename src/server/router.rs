use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, calendar, client, document, hr, manager, meeting, okr, org, personal, task, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(
    auth::login,
    auth::get_user,
    auth::logout,
    user::get_users,
    user::create_user,
    user::get_user_by_id,
    user::get_profiles,
    user::create_profile,
    client::get_clients,
    client::create_client,
    calendar::get_calendar_events,
    calendar::create_calendar_event,
    meeting::get_meetings,
    meeting::create_meeting,
    document::get_documents,
    document::create_document,
    task::get_tasks,
    task::create_task,
    personal::get_personal_tasks,
    personal::get_personal_hr_file,
    personal::get_personal_leave_records,
    personal::create_personal_leave_record,
    personal::get_personal_timesheets,
    personal::create_personal_timesheet,
    personal::get_personal_payslips,
    personal::get_personal_performance_reviews,
    personal::get_personal_expenses,
    personal::create_personal_expense,
    personal::get_personal_private_notes,
    personal::create_personal_private_note,
    okr::get_okr_dashboard,
    okr::get_objectives,
    okr::create_objective,
    okr::get_okr_tasks,
    okr::create_okr_task,
    manager::get_manager_dashboard,
    manager::get_team_members,
    manager::get_team_tasks,
    hr::get_policies,
    hr::create_policy,
    hr::get_employee_records,
    hr::create_employee_record,
    hr::get_payroll_records,
    hr::create_payroll_record,
    hr::get_hr_performance_reviews,
    hr::create_hr_performance_review,
    org::get_departments,
    org::create_department,
    org::get_roles,
    org::create_role,
))]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/users", get(user::get_users).post(user::create_user))
        .route("/api/users/{id}", get(user::get_user_by_id))
        .route(
            "/api/profiles",
            get(user::get_profiles).post(user::create_profile),
        )
        .route(
            "/api/clients",
            get(client::get_clients).post(client::create_client),
        )
        .route(
            "/api/calendar/events",
            get(calendar::get_calendar_events).post(calendar::create_calendar_event),
        )
        .route(
            "/api/meetings",
            get(meeting::get_meetings).post(meeting::create_meeting),
        )
        .route(
            "/api/documents",
            get(document::get_documents).post(document::create_document),
        )
        .route("/api/tasks", get(task::get_tasks).post(task::create_task))
        .route("/api/personal/tasks", get(personal::get_personal_tasks))
        .route("/api/personal/hr_file", get(personal::get_personal_hr_file))
        .route(
            "/api/personal/leave_records",
            get(personal::get_personal_leave_records)
                .post(personal::create_personal_leave_record),
        )
        .route(
            "/api/personal/timesheets",
            get(personal::get_personal_timesheets).post(personal::create_personal_timesheet),
        )
        .route("/api/personal/payslips", get(personal::get_personal_payslips))
        .route(
            "/api/personal/performance_reviews",
            get(personal::get_personal_performance_reviews),
        )
        .route(
            "/api/personal/expenses",
            get(personal::get_personal_expenses).post(personal::create_personal_expense),
        )
        .route(
            "/api/personal/private_notes",
            get(personal::get_personal_private_notes)
                .post(personal::create_personal_private_note),
        )
        .route("/api/okr/dashboard", get(okr::get_okr_dashboard))
        .route(
            "/api/okr/objectives",
            get(okr::get_objectives).post(okr::create_objective),
        )
        .route(
            "/api/okr/tasks",
            get(okr::get_okr_tasks).post(okr::create_okr_task),
        )
        .route("/api/manager/dashboard", get(manager::get_manager_dashboard))
        .route("/api/manager/team_members", get(manager::get_team_members))
        .route("/api/manager/team_tasks", get(manager::get_team_tasks))
        .route(
            "/api/hr/policies",
            get(hr::get_policies).post(hr::create_policy),
        )
        .route(
            "/api/hr/employee_records",
            get(hr::get_employee_records).post(hr::create_employee_record),
        )
        .route(
            "/api/hr/payroll_records",
            get(hr::get_payroll_records).post(hr::create_payroll_record),
        )
        .route(
            "/api/hr/performance_reviews",
            get(hr::get_hr_performance_reviews).post(hr::create_hr_performance_review),
        )
        .route(
            "/api/departments",
            get(org::get_departments).post(org::create_department),
        )
        .route("/api/roles", get(org::get_roles).post(org::create_role))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
