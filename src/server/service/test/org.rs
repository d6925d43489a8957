use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError, model::org::CreateRoleParams, service::org::OrgService,
};

fn role_params(department_id: i32, user_ids: Vec<i32>) -> CreateRoleParams {
    CreateRoleParams {
        name: "Engineer".to_string(),
        description: String::new(),
        department_id,
        user_ids,
    }
}

/// Tests that a role requires an existing department.
#[tokio::test]
async fn create_role_with_missing_department_persists_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = OrgService::new(db);
    let result = service.create_role(role_params(999, vec![])).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(entity::prelude::Role::find().count(db).await?, 0);

    Ok(())
}

/// Tests that one dangling member id aborts the whole role create.
#[tokio::test]
async fn create_role_with_missing_member_persists_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    let user = factory::create_user(db).await?;

    let service = OrgService::new(db);
    let result = service
        .create_role(role_params(department.id, vec![user.id, 999]))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(entity::prelude::Role::find().count(db).await?, 0);
    assert_eq!(entity::prelude::RoleMember::find().count(db).await?, 0);

    Ok(())
}

/// Tests the role create round-trip with department and members embedded.
#[tokio::test]
async fn create_role_resolves_department_and_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    let user = factory::create_user(db).await?;

    let service = OrgService::new(db);
    let role = service
        .create_role(role_params(department.id, vec![user.id]))
        .await
        .unwrap();

    assert_eq!(role.department.id, department.id);
    assert_eq!(role.users.len(), 1);
    assert_eq!(role.users[0].id, user.id);

    let listed = service.get_roles().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], role);

    Ok(())
}
