use super::*;

/// Tests the aggregate counts behind the OKR dashboard.
#[tokio::test]
async fn counts_objectives_and_tasks() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_okr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let objective1 = factory::create_objective(db, owner.id).await?;
    let objective2 = factory::create_objective(db, owner.id).await?;

    factory::create_okr_task(db, objective1.id, owner.id).await?;
    factory::create_okr_task(db, objective2.id, owner.id).await?;
    factory::okr::create_completed_okr_task(db, objective2.id, owner.id).await?;

    let repo = OkrRepository::new(db);

    assert_eq!(repo.count_objectives().await?, 2);
    assert_eq!(repo.count_tasks().await?, 3);
    assert_eq!(repo.count_completed_tasks().await?, 1);

    Ok(())
}
