//! Calendar event data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};
use std::collections::HashMap;

use crate::server::model::calendar::{CalendarEventWithRelations, CreateCalendarEventParams};

pub struct CalendarEventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CalendarEventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a calendar event and its attendee rows.
    ///
    /// Attendee ids must already be resolved against existing users; the join
    /// rows are inserted only after the event row exists.
    pub async fn create(
        &self,
        params: CreateCalendarEventParams,
    ) -> Result<entity::calendar_event::Model, DbErr> {
        let event = entity::calendar_event::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            start_time: ActiveValue::Set(params.start_time),
            end_time: ActiveValue::Set(params.end_time),
            created_by: ActiveValue::Set(params.created_by),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for user_id in params.attendees {
            entity::calendar_event_attendee::ActiveModel {
                event_id: ActiveValue::Set(event.id),
                user_id: ActiveValue::Set(user_id),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(event)
    }

    /// Gets an event by id with creator and attendee users loaded.
    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<CalendarEventWithRelations>, DbErr> {
        let Some((event, creator)) = entity::prelude::CalendarEvent::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let creator = creator.ok_or_else(|| {
            DbErr::RecordNotFound(format!("Creator of calendar event {} not found", event.id))
        })?;

        let attendee_rows = entity::prelude::CalendarEventAttendee::find()
            .filter(entity::calendar_event_attendee::Column::EventId.eq(event.id))
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

        Ok(Some(CalendarEventWithRelations {
            event,
            creator,
            attendees,
        }))
    }

    /// Gets all events with creator and attendee users loaded.
    ///
    /// Attendee users are fetched in one batched query and grouped per event.
    pub async fn get_all(&self) -> Result<Vec<CalendarEventWithRelations>, DbErr> {
        let events = entity::prelude::CalendarEvent::find()
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        let event_ids: Vec<i32> = events.iter().map(|(event, _)| event.id).collect();
        let attendee_rows = if event_ids.is_empty() {
            Vec::new()
        } else {
            entity::prelude::CalendarEventAttendee::find()
                .filter(entity::calendar_event_attendee::Column::EventId.is_in(event_ids))
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

        let mut attendees_by_event: HashMap<i32, Vec<entity::user::Model>> = HashMap::new();
        for row in attendee_rows {
            if let Some(user) = users_map.get(&row.user_id) {
                attendees_by_event
                    .entry(row.event_id)
                    .or_default()
                    .push(user.clone());
            }
        }

        events
            .into_iter()
            .map(|(event, creator)| {
                let creator = creator.ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Creator of calendar event {} not found",
                        event.id
                    ))
                })?;
                let attendees = attendees_by_event.remove(&event.id).unwrap_or_default();

                Ok(CalendarEventWithRelations {
                    event,
                    creator,
                    attendees,
                })
            })
            .collect()
    }
}
