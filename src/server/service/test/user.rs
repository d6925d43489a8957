use entity::user_profile::ProfileRole;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::user::{CreateProfileParams, CreateUserParams},
    service::user::UserService,
};

fn profile_params(user_id: i32, role: ProfileRole) -> CreateProfileParams {
    CreateProfileParams {
        user_id,
        bio: String::new(),
        profile_picture: None,
        phone_number: String::new(),
        role,
    }
}

/// Tests that an empty username fails validation.
#[tokio::test]
async fn create_rejects_empty_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let result = service
        .create(CreateUserParams {
            username: "  ".to_string(),
            email: "x@example.com".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests that profile creation requires an existing user.
#[tokio::test]
async fn create_profile_for_missing_user_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let result = service
        .create_profile(profile_params(999, ProfileRole::Customer))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests the one-profile-per-user rule.
#[tokio::test]
async fn create_profile_rejects_second_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let service = UserService::new(db);
    service
        .create_profile(profile_params(user.id, ProfileRole::Customer))
        .await
        .unwrap();

    let second = service
        .create_profile(profile_params(user.id, ProfileRole::Admin))
        .await;

    assert!(matches!(second, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests that get_by_id distinguishes found and missing users.
#[tokio::test]
async fn get_by_id_maps_missing_user_to_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let service = UserService::new(db);
    let found = service.get_by_id(user.id).await.unwrap();
    assert_eq!(found.username, user.username);

    let missing = service.get_by_id(user.id + 1).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}
