use super::*;

/// Tests that HR file lookups are scoped to one user.
#[tokio::test]
async fn finds_hr_file_for_owner_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user1 = factory::create_user(db).await?;
    let user2 = factory::create_user(db).await?;
    factory::hr::create_hr_file(db, user1.id).await?;

    let repo = HrRepository::new(db);

    let found = repo.find_hr_file_by_user(user1.id).await?;
    assert!(found.is_some());
    assert_eq!(found.unwrap().1.id, user1.id);

    let missing = repo.find_hr_file_by_user(user2.id).await?;
    assert!(missing.is_none());

    Ok(())
}

/// Tests that the JSON dossier round-trips through the database.
#[tokio::test]
async fn hr_file_data_round_trips() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = HrRepository::new(db);
    let data = serde_json::json!({"position": "Analyst", "grade": 4});
    repo.create_hr_file(CreateHrFileParams {
        user_id: user.id,
        data: data.clone(),
    })
    .await?;

    let (file, _) = repo.find_hr_file_by_user(user.id).await?.unwrap();
    assert_eq!(file.data, data);

    Ok(())
}

/// Tests per-user filtering across the record family.
///
/// Each list method must return rows for the requested user only.
#[tokio::test]
async fn per_user_queries_exclude_other_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user1 = factory::create_user(db).await?;
    let user2 = factory::create_user(db).await?;

    factory::hr::create_leave_record(db, user1.id).await?;
    factory::hr::create_leave_record(db, user2.id).await?;
    factory::hr::create_timesheet(db, user1.id).await?;
    factory::hr::create_payslip(db, user1.id).await?;
    factory::hr::create_performance_review(db, user1.id).await?;
    factory::hr::create_expense(db, user1.id).await?;
    factory::hr::create_private_note(db, user1.id).await?;

    let repo = HrRepository::new(db);

    assert_eq!(repo.get_leave_records_by_user(user1.id).await?.len(), 1);
    assert_eq!(repo.get_timesheets_by_user(user1.id).await?.len(), 1);
    assert_eq!(repo.get_payslips_by_user(user1.id).await?.len(), 1);
    assert_eq!(
        repo.get_performance_reviews_by_user(user1.id).await?.len(),
        1
    );
    assert_eq!(repo.get_expenses_by_user(user1.id).await?.len(), 1);
    assert_eq!(repo.get_private_notes_by_user(user1.id).await?.len(), 1);

    assert_eq!(repo.get_timesheets_by_user(user2.id).await?.len(), 0);
    assert_eq!(repo.get_payslips_by_user(user2.id).await?.len(), 0);

    Ok(())
}

/// Tests that decimal hours survive storage unchanged.
#[tokio::test]
async fn timesheet_hours_round_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = HrRepository::new(db);
    let hours = Decimal::new(725, 2); // 7.25
    repo.create_timesheet(CreateTimesheetParams {
        user_id: user.id,
        date: chrono::Utc::now().date_naive(),
        hours_worked: hours,
    })
    .await?;

    let rows = repo.get_timesheets_by_user(user.id).await?;
    assert_eq!(rows[0].0.hours_worked, hours);

    Ok(())
}

/// Tests the company-wide payroll listing used by the HR surface.
#[tokio::test]
async fn lists_all_payslips_across_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user1 = factory::create_user(db).await?;
    let user2 = factory::create_user(db).await?;
    factory::hr::create_payslip(db, user1.id).await?;
    factory::hr::create_payslip(db, user2.id).await?;

    let repo = HrRepository::new(db);
    let all = repo.get_all_payslips().await?;

    assert_eq!(all.len(), 2);

    Ok(())
}
