use super::*;

/// Tests creating a meeting with a meet link and attendees.
///
/// Verifies the meeting row and its attendee rows are persisted, and that
/// get-style reads return the link unchanged.
#[tokio::test]
async fn creates_meeting_with_link_and_attendees() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_meeting_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let attendee = factory::create_user(db).await?;

    let start = Utc::now();
    let repo = MeetingRepository::new(db);
    let meeting = repo
        .create(CreateMeetingParams {
            title: "Sync".to_string(),
            description: String::new(),
            start_time: start,
            end_time: start + Duration::minutes(30),
            created_by: creator.id,
            attendees: vec![attendee.id],
            meet_link: "https://meet.example.com/sync".to_string(),
        })
        .await?;

    assert_eq!(meeting.meet_link, "https://meet.example.com/sync");

    let rows = entity::prelude::MeetingAttendee::find()
        .filter(entity::meeting_attendee::Column::MeetingId.eq(meeting.id))
        .all(db)
        .await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].user_id, attendee.id);

    let full = repo.find_by_id(meeting.id).await?.unwrap();
    assert_eq!(full.creator.id, creator.id);
    assert_eq!(full.attendees.len(), 1);
    assert_eq!(full.meeting.meet_link, "https://meet.example.com/sync");

    Ok(())
}

/// Tests that meetings and their attendees are isolated per meeting.
#[tokio::test]
async fn get_all_groups_attendees_per_meeting() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_meeting_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let attendee = factory::create_user(db).await?;

    let meeting1 = factory::create_meeting(db, creator.id).await?;
    let meeting2 = factory::create_meeting(db, creator.id).await?;
    factory::create_meeting_attendee(db, meeting1.id, attendee.id).await?;

    let repo = MeetingRepository::new(db);
    let meetings = repo.get_all().await?;

    assert_eq!(meetings.len(), 2);

    let first = meetings
        .iter()
        .find(|m| m.meeting.id == meeting1.id)
        .unwrap();
    assert_eq!(first.attendees.len(), 1);

    let second = meetings
        .iter()
        .find(|m| m.meeting.id == meeting2.id)
        .unwrap();
    assert!(second.attendees.is_empty());

    Ok(())
}
