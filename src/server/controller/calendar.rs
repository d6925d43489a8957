use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        calendar::{CalendarEventDto, CreateCalendarEventDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::calendar::{CalendarEvent, CreateCalendarEventParams},
        service::calendar::CalendarEventService,
        state::AppState,
    },
};

/// Tag for grouping calendar endpoints in OpenAPI documentation
pub static CALENDAR_TAG: &str = "calendar";

/// List all calendar events with creator and attendees.
#[utoipa::path(
    get,
    path = "/api/calendar/events",
    tag = CALENDAR_TAG,
    responses(
        (status = 200, description = "All calendar events", body = Vec<CalendarEventDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_calendar_events(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let events = CalendarEventService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            events
                .into_iter()
                .map(CalendarEvent::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create a calendar event with an attendee set.
///
/// The creator and every attendee id must reference existing users; the event
/// must not end before it starts.
#[utoipa::path(
    post,
    path = "/api/calendar/events",
    tag = CALENDAR_TAG,
    request_body = CreateCalendarEventDto,
    responses(
        (status = 201, description = "Created calendar event", body = CalendarEventDto),
        (status = 400, description = "Invalid time range", body = ErrorDto),
        (status = 404, description = "Referenced user not found", body = ErrorDto)
    ),
)]
pub async fn create_calendar_event(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCalendarEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let event = CalendarEventService::new(&state.db)
        .create(CreateCalendarEventParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(event.into_dto())))
}
