use super::*;

/// Tests creating a profile and finding it by owner id.
#[tokio::test]
async fn creates_profile_with_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let profile = repo
        .create_profile(CreateProfileParams {
            user_id: user.id,
            bio: "Team lead".to_string(),
            profile_picture: None,
            phone_number: String::new(),
            role: ProfileRole::Manager,
        })
        .await?;

    assert_eq!(profile.role, ProfileRole::Manager);

    let found = repo.find_profile_by_user_id(user.id).await?.unwrap();
    assert_eq!(found.id, profile.id);
    assert_eq!(found.bio, "Team lead");

    Ok(())
}

/// Tests that the profile listing resolves owning users.
#[tokio::test]
async fn lists_profiles_with_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user1, _) = factory::helpers::create_user_with_role(db, ProfileRole::Admin).await?;
    let (user2, _) = factory::helpers::create_user_with_role(db, ProfileRole::Customer).await?;

    let repo = UserRepository::new(db);
    let profiles = repo.get_all_profiles().await?;

    assert_eq!(profiles.len(), 2);
    let owner_ids: Vec<i32> = profiles.iter().map(|(_, user)| user.id).collect();
    assert!(owner_ids.contains(&user1.id));
    assert!(owner_ids.contains(&user2.id));

    Ok(())
}
