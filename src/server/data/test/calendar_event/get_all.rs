use super::*;

/// Tests that get_all returns an empty list on an empty table.
#[tokio::test]
async fn returns_empty_list_without_events() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CalendarEventRepository::new(db);
    let events = repo.get_all().await?;

    assert!(events.is_empty());

    Ok(())
}

/// Tests that get_all resolves the creator and groups attendees per event.
///
/// Two events with different attendee sets must come back with exactly their
/// own attendees attached.
#[tokio::test]
async fn resolves_creator_and_attendees_per_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let attendee1 = factory::create_user(db).await?;
    let attendee2 = factory::create_user(db).await?;

    let event1 = factory::create_event(db, creator.id).await?;
    let event2 = factory::create_event(db, creator.id).await?;
    factory::create_event_attendee(db, event1.id, attendee1.id).await?;
    factory::create_event_attendee(db, event1.id, attendee2.id).await?;
    factory::create_event_attendee(db, event2.id, attendee2.id).await?;

    let repo = CalendarEventRepository::new(db);
    let events = repo.get_all().await?;

    assert_eq!(events.len(), 2);

    let first = events.iter().find(|e| e.event.id == event1.id).unwrap();
    assert_eq!(first.creator.id, creator.id);
    let mut first_attendees: Vec<i32> = first.attendees.iter().map(|u| u.id).collect();
    first_attendees.sort_unstable();
    let mut expected = vec![attendee1.id, attendee2.id];
    expected.sort_unstable();
    assert_eq!(first_attendees, expected);

    let second = events.iter().find(|e| e.event.id == event2.id).unwrap();
    let second_attendees: Vec<i32> = second.attendees.iter().map(|u| u.id).collect();
    assert_eq!(second_attendees, vec![attendee2.id]);

    Ok(())
}

/// Tests that find_by_id returns None for a missing event.
#[tokio::test]
async fn find_by_id_returns_none_for_missing_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CalendarEventRepository::new(db);
    let result = repo.find_by_id(999).await?;

    assert!(result.is_none());

    Ok(())
}
