use sea_orm::DatabaseConnection;

use crate::server::{
    data::calendar_event::CalendarEventRepository,
    error::AppError,
    model::calendar::{CalendarEvent, CreateCalendarEventParams},
    service::{resolve_user, resolve_users},
};

pub struct CalendarEventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CalendarEventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a calendar event with its attendee set.
    ///
    /// Validates the time range, then resolves the creator and every attendee
    /// id before any row is written. Duplicate attendee ids collapse to one
    /// membership.
    pub async fn create(
        &self,
        mut params: CreateCalendarEventParams,
    ) -> Result<CalendarEvent, AppError> {
        if params.end_time < params.start_time {
            return Err(AppError::Validation(
                "end_time must not precede start_time".to_string(),
            ));
        }

        params.attendees.sort_unstable();
        params.attendees.dedup();

        resolve_user(self.db, params.created_by).await?;
        resolve_users(self.db, &params.attendees).await?;

        let repo = CalendarEventRepository::new(self.db);
        let event = repo.create(params).await?;

        let full = repo.find_by_id(event.id).await?.ok_or_else(|| {
            AppError::NotFound("Calendar event not found after creation".to_string())
        })?;

        Ok(CalendarEvent::from_with_relations(full))
    }

    pub async fn get_all(&self) -> Result<Vec<CalendarEvent>, AppError> {
        let events = CalendarEventRepository::new(self.db).get_all().await?;

        Ok(events
            .into_iter()
            .map(CalendarEvent::from_with_relations)
            .collect())
    }
}
