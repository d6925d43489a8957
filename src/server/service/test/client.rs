use entity::user_profile::ProfileRole;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError, model::client::CreateClientParams, service::client::ClientService,
};

fn client_params(organisation_id: i32) -> CreateClientParams {
    CreateClientParams {
        name: "Acme".to_string(),
        phone: "555-0100".to_string(),
        address: "1 Main St".to_string(),
        email: "contact@acme.example.com".to_string(),
        organisation_id,
    }
}

/// Tests that a client requires an existing organising profile.
#[tokio::test]
async fn create_with_missing_profile_persists_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ClientService::new(db);
    let result = service.create(client_params(999)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(entity::prelude::Client::find().count(db).await?, 0);

    Ok(())
}

/// Tests the client create/list round-trip.
#[tokio::test]
async fn create_then_list_round_trips() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, profile) = factory::helpers::create_user_with_role(db, ProfileRole::Admin).await?;

    let service = ClientService::new(db);
    let created = service.create(client_params(profile.id)).await.unwrap();

    assert_eq!(created.organisation_id, profile.id);

    let listed = service.get_all().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], created);

    Ok(())
}
