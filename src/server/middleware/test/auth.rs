use entity::user_profile::ProfileRole;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    controller::auth::SESSION_AUTH_USER_ID,
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
};

/// Tests that a request without a session user is rejected.
#[tokio::test]
async fn rejects_request_without_session_user() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests that a session pointing at a deleted user is rejected.
#[tokio::test]
async fn rejects_session_for_deleted_user() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    session.insert(SESSION_AUTH_USER_ID, 999).await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(999)))
    ));

    Ok(())
}

/// Tests that a logged-in user passes an empty permission check.
#[tokio::test]
async fn allows_logged_in_user() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    session.insert(SESSION_AUTH_USER_ID, user.id).await.unwrap();

    let resolved = AuthGuard::new(db, session).require(&[]).await.unwrap();
    assert_eq!(resolved.id, user.id);

    Ok(())
}

/// Tests that role gates deny users without the required profile role.
#[tokio::test]
async fn denies_user_without_required_role() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (user, _) = factory::helpers::create_user_with_role(db, ProfileRole::Customer).await?;
    session.insert(SESSION_AUTH_USER_ID, user.id).await.unwrap();

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Manager])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that the matching role passes its gate.
#[tokio::test]
async fn allows_user_with_matching_role() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (user, _) = factory::helpers::create_user_with_role(db, ProfileRole::Manager).await?;
    session.insert(SESSION_AUTH_USER_ID, user.id).await.unwrap();

    let resolved = AuthGuard::new(db, session)
        .require(&[Permission::Manager])
        .await
        .unwrap();
    assert_eq!(resolved.id, user.id);

    Ok(())
}

/// Tests that an admin profile passes every gate.
#[tokio::test]
async fn admin_passes_all_gates() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (user, _) = factory::helpers::create_user_with_role(db, ProfileRole::Admin).await?;
    session.insert(SESSION_AUTH_USER_ID, user.id).await.unwrap();

    let guard = AuthGuard::new(db, session);
    assert!(guard.require(&[Permission::Manager]).await.is_ok());
    assert!(guard.require(&[Permission::Hr]).await.is_ok());
    assert!(guard.require(&[Permission::Admin]).await.is_ok());

    Ok(())
}

/// Tests that a user with no profile fails role-gated checks.
#[tokio::test]
async fn denies_user_without_profile() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    session.insert(SESSION_AUTH_USER_ID, user.id).await.unwrap();

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Hr])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
