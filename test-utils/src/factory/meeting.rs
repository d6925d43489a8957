use crate::factory::helpers::next_id;
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a one-hour meeting starting now.
pub async fn create_meeting(
    db: &DatabaseConnection,
    created_by: i32,
) -> Result<entity::meeting::Model, DbErr> {
    let now = Utc::now();
    entity::meeting::ActiveModel {
        title: ActiveValue::Set(format!("Meeting {}", next_id())),
        description: ActiveValue::Set(String::new()),
        start_time: ActiveValue::Set(now),
        end_time: ActiveValue::Set(now + Duration::hours(1)),
        created_by: ActiveValue::Set(created_by),
        meet_link: ActiveValue::Set(String::new()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Adds an attendee row to an existing meeting.
pub async fn create_meeting_attendee(
    db: &DatabaseConnection,
    meeting_id: i32,
    user_id: i32,
) -> Result<entity::meeting_attendee::Model, DbErr> {
    entity::meeting_attendee::ActiveModel {
        meeting_id: ActiveValue::Set(meeting_id),
        user_id: ActiveValue::Set(user_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
