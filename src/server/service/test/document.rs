use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError, model::document::CreateDocumentParams, service::document::DocumentService,
};

/// Tests that a dangling uploader id fails with NotFound and no row created.
#[tokio::test]
async fn create_with_missing_uploader_persists_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Document)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = DocumentService::new(db);
    let result = service
        .create(CreateDocumentParams {
            title: "Orphan".to_string(),
            description: String::new(),
            uploaded_by: 999,
            file_path: "documents/orphan.pdf".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(entity::prelude::Document::find().count(db).await?, 0);

    Ok(())
}

/// Tests the create/list round-trip with the uploader embedded.
#[tokio::test]
async fn create_then_list_round_trips() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Document)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let uploader = factory::create_user(db).await?;

    let service = DocumentService::new(db);
    let created = service
        .create(CreateDocumentParams {
            title: "Q3 Report".to_string(),
            description: "Financials".to_string(),
            uploaded_by: uploader.id,
            file_path: "documents/q3.pdf".to_string(),
        })
        .await
        .unwrap();

    let listed = service.get_all().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], created);
    assert_eq!(listed[0].uploaded_by.username, uploader.username);

    Ok(())
}
