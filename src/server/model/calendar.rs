//! Calendar event domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::calendar::{CalendarEventDto, CreateCalendarEventDto},
    server::model::user::User,
};

/// Calendar event entity with creator and attendee users loaded.
///
/// Raw repository result before conversion to the domain model.
#[derive(Debug, Clone)]
pub struct CalendarEventWithRelations {
    pub event: entity::calendar_event::Model,
    pub creator: entity::user::Model,
    pub attendees: Vec<entity::user::Model>,
}

/// Calendar event with its user relations resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_by: User,
    pub attendees: Vec<User>,
}

impl CalendarEvent {
    pub fn from_with_relations(data: CalendarEventWithRelations) -> Self {
        Self {
            id: data.event.id,
            title: data.event.title,
            description: data.event.description,
            start_time: data.event.start_time,
            end_time: data.event.end_time,
            created_by: User::from_entity(data.creator),
            attendees: data.attendees.into_iter().map(User::from_entity).collect(),
        }
    }

    pub fn into_dto(self) -> CalendarEventDto {
        CalendarEventDto {
            id: self.id,
            title: self.title,
            description: self.description,
            start_time: self.start_time,
            end_time: self.end_time,
            created_by: self.created_by.into_dto(),
            attendees: self.attendees.into_iter().map(User::into_dto).collect(),
        }
    }
}

/// Parameters for creating a calendar event with its attendee set.
#[derive(Debug, Clone)]
pub struct CreateCalendarEventParams {
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_by: i32,
    pub attendees: Vec<i32>,
}

impl CreateCalendarEventParams {
    pub fn from_dto(dto: CreateCalendarEventDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            start_time: dto.start_time,
            end_time: dto.end_time,
            created_by: dto.created_by,
            attendees: dto.attendees,
        }
    }
}
