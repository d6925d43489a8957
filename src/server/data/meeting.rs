//! Meeting data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};
use std::collections::HashMap;

use crate::server::model::meeting::{CreateMeetingParams, MeetingWithRelations};

pub struct MeetingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MeetingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a meeting and its attendee rows.
    ///
    /// Attendee ids must already be resolved against existing users; the join
    /// rows are inserted only after the meeting row exists.
    pub async fn create(
        &self,
        params: CreateMeetingParams,
    ) -> Result<entity::meeting::Model, DbErr> {
        let meeting = entity::meeting::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            start_time: ActiveValue::Set(params.start_time),
            end_time: ActiveValue::Set(params.end_time),
            created_by: ActiveValue::Set(params.created_by),
            meet_link: ActiveValue::Set(params.meet_link),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for user_id in params.attendees {
            entity::meeting_attendee::ActiveModel {
                meeting_id: ActiveValue::Set(meeting.id),
                user_id: ActiveValue::Set(user_id),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(meeting)
    }

    /// Gets a meeting by id with creator and attendee users loaded.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<MeetingWithRelations>, DbErr> {
        let Some((meeting, creator)) = entity::prelude::Meeting::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let creator = creator.ok_or_else(|| {
            DbErr::RecordNotFound(format!("Creator of meeting {} not found", meeting.id))
        })?;

        let attendee_rows = entity::prelude::MeetingAttendee::find()
            .filter(entity::meeting_attendee::Column::MeetingId.eq(meeting.id))
            .all(self.db)
            .await?;

        let user_ids: Vec<i32> = attendee_rows.iter().map(|row| row.user_id).collect();
        let attendees = if user_ids.is_empty() {
            Vec::new()
        } else {
            entity::prelude::User::find()
                .filter(entity::user::Column::Id.is_in(user_ids))
                .all(self.db)
                .await?
        };

        Ok(Some(MeetingWithRelations {
            meeting,
            creator,
            attendees,
        }))
    }

    /// Gets all meetings with creator and attendee users loaded.
    pub async fn get_all(&self) -> Result<Vec<MeetingWithRelations>, DbErr> {
        let meetings = entity::prelude::Meeting::find()
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        let meeting_ids: Vec<i32> = meetings.iter().map(|(meeting, _)| meeting.id).collect();
        let attendee_rows = if meeting_ids.is_empty() {
            Vec::new()
        } else {
            entity::prelude::MeetingAttendee::find()
                .filter(entity::meeting_attendee::Column::MeetingId.is_in(meeting_ids))
                .all(self.db)
                .await?
        };

        let user_ids: Vec<i32> = attendee_rows.iter().map(|row| row.user_id).collect();
        let users_map: HashMap<i32, entity::user::Model> = if user_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::User::find()
                .filter(entity::user::Column::Id.is_in(user_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|user| (user.id, user))
                .collect()
        };

        let mut attendees_by_meeting: HashMap<i32, Vec<entity::user::Model>> = HashMap::new();
        for row in attendee_rows {
            if let Some(user) = users_map.get(&row.user_id) {
                attendees_by_meeting
                    .entry(row.meeting_id)
                    .or_default()
                    .push(user.clone());
            }
        }

        meetings
            .into_iter()
            .map(|(meeting, creator)| {
                let creator = creator.ok_or_else(|| {
                    DbErr::RecordNotFound(format!("Creator of meeting {} not found", meeting.id))
                })?;
                let attendees = attendees_by_meeting.remove(&meeting.id).unwrap_or_default();

                Ok(MeetingWithRelations {
                    meeting,
                    creator,
                    attendees,
                })
            })
            .collect()
    }
}
