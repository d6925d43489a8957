use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::calendar::CreateCalendarEventParams,
    service::calendar::CalendarEventService,
};

fn event_params(created_by: i32, attendees: Vec<i32>) -> CreateCalendarEventParams {
    let start = Utc::now();
    CreateCalendarEventParams {
        title: "Standup".to_string(),
        description: String::new(),
        start_time: start,
        end_time: start + Duration::minutes(15),
        created_by,
        attendees,
    }
}

/// Tests the full create round-trip.
///
/// The returned event must echo all fields, carry a fresh id, and the exact
/// attendee set; a subsequent list must include it unchanged.
#[tokio::test]
async fn create_echoes_fields_and_attendee_set() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let attendee = factory::create_user(db).await?;

    let service = CalendarEventService::new(db);
    let event = service
        .create(event_params(creator.id, vec![creator.id, attendee.id]))
        .await
        .unwrap();

    assert_eq!(event.title, "Standup");
    assert_eq!(event.created_by.id, creator.id);
    let mut attendee_ids: Vec<i32> = event.attendees.iter().map(|u| u.id).collect();
    attendee_ids.sort_unstable();
    let mut expected = vec![creator.id, attendee.id];
    expected.sort_unstable();
    assert_eq!(attendee_ids, expected);

    let listed = service.get_all().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], event);

    Ok(())
}

/// Tests that a dangling creator id aborts the create with nothing persisted.
#[tokio::test]
async fn create_with_missing_creator_persists_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CalendarEventService::new(db);
    let result = service.create(event_params(999, vec![])).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(entity::prelude::CalendarEvent::find().count(db).await?, 0);

    Ok(())
}

/// Tests that one dangling attendee id aborts the whole create.
///
/// Neither the event row nor any attendee row may survive.
#[tokio::test]
async fn create_with_missing_attendee_persists_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;

    let service = CalendarEventService::new(db);
    let result = service
        .create(event_params(creator.id, vec![creator.id, 999]))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(entity::prelude::CalendarEvent::find().count(db).await?, 0);
    assert_eq!(
        entity::prelude::CalendarEventAttendee::find()
            .count(db)
            .await?,
        0
    );

    Ok(())
}

/// Tests the added time-range invariant.
///
/// An event ending before it starts fails validation with nothing persisted.
#[tokio::test]
async fn create_rejects_inverted_time_range() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;

    let start = Utc::now();
    let service = CalendarEventService::new(db);
    let result = service
        .create(CreateCalendarEventParams {
            title: "Backwards".to_string(),
            description: String::new(),
            start_time: start,
            end_time: start - Duration::hours(1),
            created_by: creator.id,
            attendees: vec![],
        })
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(entity::prelude::CalendarEvent::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a zero-length event is allowed (end equal to start).
#[tokio::test]
async fn create_allows_zero_length_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;

    let start = Utc::now();
    let service = CalendarEventService::new(db);
    let result = service
        .create(CreateCalendarEventParams {
            title: "Instant".to_string(),
            description: String::new(),
            start_time: start,
            end_time: start,
            created_by: creator.id,
            attendees: vec![],
        })
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that duplicate attendee ids collapse to a single membership.
#[tokio::test]
async fn create_deduplicates_attendees() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let attendee = factory::create_user(db).await?;

    let service = CalendarEventService::new(db);
    let event = service
        .create(event_params(creator.id, vec![attendee.id, attendee.id]))
        .await
        .unwrap();

    assert_eq!(event.attendees.len(), 1);
    assert_eq!(
        entity::prelude::CalendarEventAttendee::find()
            .count(db)
            .await?,
        1
    );

    Ok(())
}
