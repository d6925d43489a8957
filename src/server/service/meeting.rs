use sea_orm::DatabaseConnection;

use crate::server::{
    data::meeting::MeetingRepository,
    error::AppError,
    model::meeting::{CreateMeetingParams, Meeting},
    service::{resolve_user, resolve_users},
};

pub struct MeetingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MeetingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a meeting with its attendee set.
    ///
    /// Validates the time range, then resolves the creator and every attendee
    /// id before any row is written. Duplicate attendee ids collapse to one
    /// membership.
    pub async fn create(&self, mut params: CreateMeetingParams) -> Result<Meeting, AppError> {
        if params.end_time < params.start_time {
            return Err(AppError::Validation(
                "end_time must not precede start_time".to_string(),
            ));
        }

        params.attendees.sort_unstable();
        params.attendees.dedup();

        resolve_user(self.db, params.created_by).await?;
        resolve_users(self.db, &params.attendees).await?;

        let repo = MeetingRepository::new(self.db);
        let meeting = repo.create(params).await?;

        let full = repo
            .find_by_id(meeting.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Meeting not found after creation".to_string()))?;

        Ok(Meeting::from_with_relations(full))
    }

    pub async fn get_all(&self) -> Result<Vec<Meeting>, AppError> {
        let meetings = MeetingRepository::new(self.db).get_all().await?;

        Ok(meetings
            .into_iter()
            .map(Meeting::from_with_relations)
            .collect())
    }
}
