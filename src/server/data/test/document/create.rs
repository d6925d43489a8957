use super::*;

/// Tests creating a document record and listing it with its uploader.
#[tokio::test]
async fn creates_document_and_resolves_uploader() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Document)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let uploader = factory::create_user(db).await?;

    let repo = DocumentRepository::new(db);
    let document = repo
        .create(CreateDocumentParams {
            title: "Handbook".to_string(),
            description: String::new(),
            uploaded_by: uploader.id,
            file_path: "documents/handbook.pdf".to_string(),
        })
        .await?;

    assert_eq!(document.file_path, "documents/handbook.pdf");

    let all = repo.get_all().await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].0.id, document.id);
    assert_eq!(all[0].1.id, uploader.id);

    Ok(())
}
