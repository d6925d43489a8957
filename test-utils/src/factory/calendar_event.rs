//! Calendar event factory for creating test event entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test calendar events with customizable fields.
///
/// Defaults to a one-hour event starting now.
pub struct CalendarEventFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: String,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    created_by: i32,
}

impl<'a> CalendarEventFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, created_by: i32) -> Self {
        let now = Utc::now();
        Self {
            db,
            title: format!("Event {}", next_id()),
            description: String::new(),
            start_time: now,
            end_time: now + Duration::hours(1),
            created_by,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self
    }

    pub fn end_time(mut self, end_time: DateTime<Utc>) -> Self {
        self.end_time = end_time;
        self
    }

    pub async fn build(self) -> Result<entity::calendar_event::Model, DbErr> {
        entity::calendar_event::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            created_by: ActiveValue::Set(self.created_by),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a calendar event with default values.
pub async fn create_event(
    db: &DatabaseConnection,
    created_by: i32,
) -> Result<entity::calendar_event::Model, DbErr> {
    CalendarEventFactory::new(db, created_by).build().await
}

/// Adds an attendee row to an existing event.
pub async fn create_event_attendee(
    db: &DatabaseConnection,
    event_id: i32,
    user_id: i32,
) -> Result<entity::calendar_event_attendee::Model, DbErr> {
    entity::calendar_event_attendee::ActiveModel {
        event_id: ActiveValue::Set(event_id),
        user_id: ActiveValue::Set(user_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
