use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        meeting::{CreateMeetingDto, MeetingDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::meeting::{CreateMeetingParams, Meeting},
        service::meeting::MeetingService,
        state::AppState,
    },
};

/// Tag for grouping meeting endpoints in OpenAPI documentation
pub static MEETING_TAG: &str = "meeting";

/// List all meetings with creator and attendees.
#[utoipa::path(
    get,
    path = "/api/meetings",
    tag = MEETING_TAG,
    responses(
        (status = 200, description = "All meetings", body = Vec<MeetingDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_meetings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let meetings = MeetingService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            meetings
                .into_iter()
                .map(Meeting::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create a meeting with an attendee set.
///
/// The creator and every attendee id must reference existing users; the
/// meeting must not end before it starts.
#[utoipa::path(
    post,
    path = "/api/meetings",
    tag = MEETING_TAG,
    request_body = CreateMeetingDto,
    responses(
        (status = 201, description = "Created meeting", body = MeetingDto),
        (status = 400, description = "Invalid time range", body = ErrorDto),
        (status = 404, description = "Referenced user not found", body = ErrorDto)
    ),
)]
pub async fn create_meeting(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateMeetingDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let meeting = MeetingService::new(&state.db)
        .create(CreateMeetingParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(meeting.into_dto())))
}
