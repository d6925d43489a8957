use super::*;

/// Tests listing objectives with their owners resolved.
#[tokio::test]
async fn lists_objectives_with_owners() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_okr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let objective = factory::create_objective(db, owner.id).await?;

    let repo = OkrRepository::new(db);
    let objectives = repo.get_all_objectives().await?;

    assert_eq!(objectives.len(), 1);
    assert_eq!(objectives[0].0.id, objective.id);
    assert_eq!(objectives[0].1.id, owner.id);

    Ok(())
}

/// Tests that deleting an objective cascades to its tasks.
#[tokio::test]
async fn deleting_objective_cascades_to_tasks() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_okr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let objective = factory::create_objective(db, owner.id).await?;
    factory::create_okr_task(db, objective.id, owner.id).await?;
    factory::create_okr_task(db, objective.id, owner.id).await?;

    entity::prelude::Objective::delete_by_id(objective.id)
        .exec(db)
        .await?;

    let remaining = entity::prelude::OkrTask::find().count(db).await?;
    assert_eq!(remaining, 0);

    Ok(())
}
