use super::*;

/// Tests creating a role with an initial member set.
#[tokio::test]
async fn creates_role_with_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    let user1 = factory::create_user(db).await?;
    let user2 = factory::create_user(db).await?;

    let repo = OrgRepository::new(db);
    let role = repo
        .create_role(CreateRoleParams {
            name: "Engineer".to_string(),
            description: String::new(),
            department_id: department.id,
            user_ids: vec![user1.id, user2.id],
        })
        .await?;

    let full = repo.find_role_by_id(role.id).await?.unwrap();
    assert_eq!(full.department.id, department.id);

    let mut member_ids: Vec<i32> = full.users.iter().map(|u| u.id).collect();
    member_ids.sort_unstable();
    let mut expected = vec![user1.id, user2.id];
    expected.sort_unstable();
    assert_eq!(member_ids, expected);

    Ok(())
}

/// Tests the role listing with departments and members grouped per role.
#[tokio::test]
async fn lists_roles_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    let user = factory::create_user(db).await?;

    let role1 = factory::create_role(db, department.id).await?;
    let role2 = factory::create_role(db, department.id).await?;
    factory::create_role_member(db, role1.id, user.id).await?;

    let repo = OrgRepository::new(db);
    let roles = repo.get_all_roles().await?;

    assert_eq!(roles.len(), 2);

    let first = roles.iter().find(|r| r.role.id == role1.id).unwrap();
    assert_eq!(first.users.len(), 1);

    let second = roles.iter().find(|r| r.role.id == role2.id).unwrap();
    assert!(second.users.is_empty());

    Ok(())
}

/// Tests that deleting a department cascades to roles and memberships.
#[tokio::test]
async fn deleting_department_cascades_to_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    let user = factory::create_user(db).await?;
    let role = factory::create_role(db, department.id).await?;
    factory::create_role_member(db, role.id, user.id).await?;

    entity::prelude::Department::delete_by_id(department.id)
        .exec(db)
        .await?;

    assert_eq!(entity::prelude::Role::find().count(db).await?, 0);
    assert_eq!(entity::prelude::RoleMember::find().count(db).await?, 0);

    Ok(())
}
