//! Meeting domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::meeting::{CreateMeetingDto, MeetingDto},
    server::model::user::User,
};

/// Meeting entity with creator and attendee users loaded.
#[derive(Debug, Clone)]
pub struct MeetingWithRelations {
    pub meeting: entity::meeting::Model,
    pub creator: entity::user::Model,
    pub attendees: Vec<entity::user::Model>,
}

/// Meeting with its user relations resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Meeting {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_by: User,
    pub attendees: Vec<User>,
    pub meet_link: String,
}

impl Meeting {
    pub fn from_with_relations(data: MeetingWithRelations) -> Self {
        Self {
            id: data.meeting.id,
            title: data.meeting.title,
            description: data.meeting.description,
            start_time: data.meeting.start_time,
            end_time: data.meeting.end_time,
            created_by: User::from_entity(data.creator),
            attendees: data.attendees.into_iter().map(User::from_entity).collect(),
            meet_link: data.meeting.meet_link,
        }
    }

    pub fn into_dto(self) -> MeetingDto {
        MeetingDto {
            id: self.id,
            title: self.title,
            description: self.description,
            start_time: self.start_time,
            end_time: self.end_time,
            created_by: self.created_by.into_dto(),
            attendees: self.attendees.into_iter().map(User::into_dto).collect(),
            meet_link: self.meet_link,
        }
    }
}

/// Parameters for creating a meeting with its attendee set.
#[derive(Debug, Clone)]
pub struct CreateMeetingParams {
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_by: i32,
    pub attendees: Vec<i32>,
    pub meet_link: String,
}

impl CreateMeetingParams {
    pub fn from_dto(dto: CreateMeetingDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            start_time: dto.start_time,
            end_time: dto.end_time,
            created_by: dto.created_by,
            attendees: dto.attendees,
            meet_link: dto.meet_link,
        }
    }
}
