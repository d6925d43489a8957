use super::*;

/// Tests creating an event without attendees.
///
/// Verifies the event row is persisted with the given fields and that no
/// attendee rows exist.
///
/// Expected: Ok with event created
#[tokio::test]
async fn creates_event_without_attendees() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;

    let start = Utc::now();
    let repo = CalendarEventRepository::new(db);
    let event = repo
        .create(CreateCalendarEventParams {
            title: "Standup".to_string(),
            description: String::new(),
            start_time: start,
            end_time: start + Duration::minutes(15),
            created_by: creator.id,
            attendees: vec![],
        })
        .await?;

    assert_eq!(event.title, "Standup");
    assert_eq!(event.created_by, creator.id);

    let db_event = entity::prelude::CalendarEvent::find_by_id(event.id)
        .one(db)
        .await?;
    assert!(db_event.is_some());

    let attendee_count = entity::prelude::CalendarEventAttendee::find()
        .filter(entity::calendar_event_attendee::Column::EventId.eq(event.id))
        .count(db)
        .await?;
    assert_eq!(attendee_count, 0);

    Ok(())
}

/// Tests creating an event with attendees.
///
/// Verifies one attendee row per supplied user id, inserted against the new
/// event's id.
///
/// Expected: Ok with event and attendee rows created
#[tokio::test]
async fn creates_event_with_attendees() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let attendee1 = factory::create_user(db).await?;
    let attendee2 = factory::create_user(db).await?;

    let start = Utc::now();
    let repo = CalendarEventRepository::new(db);
    let event = repo
        .create(CreateCalendarEventParams {
            title: "Planning".to_string(),
            description: "Quarterly planning".to_string(),
            start_time: start,
            end_time: start + Duration::hours(2),
            created_by: creator.id,
            attendees: vec![attendee1.id, attendee2.id],
        })
        .await?;

    let rows = entity::prelude::CalendarEventAttendee::find()
        .filter(entity::calendar_event_attendee::Column::EventId.eq(event.id))
        .all(db)
        .await?;

    assert_eq!(rows.len(), 2);
    let user_ids: Vec<i32> = rows.iter().map(|row| row.user_id).collect();
    assert!(user_ids.contains(&attendee1.id));
    assert!(user_ids.contains(&attendee2.id));

    Ok(())
}

/// Tests that successive creates get distinct new ids.
#[tokio::test]
async fn assigns_unique_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;

    let start = Utc::now();
    let repo = CalendarEventRepository::new(db);

    let mut ids = Vec::new();
    for title in ["First", "Second", "Third"] {
        let event = repo
            .create(CreateCalendarEventParams {
                title: title.to_string(),
                description: String::new(),
                start_time: start,
                end_time: start + Duration::hours(1),
                created_by: creator.id,
                attendees: vec![],
            })
            .await?;
        ids.push(event.id);
    }

    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 3);

    Ok(())
}
