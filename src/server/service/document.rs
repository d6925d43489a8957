use sea_orm::DatabaseConnection;

use crate::server::{
    data::document::DocumentRepository,
    error::AppError,
    model::document::{CreateDocumentParams, Document},
    service::resolve_user,
};

pub struct DocumentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DocumentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a document record.
    ///
    /// Resolves the uploader before inserting; a dangling uploader id fails
    /// with `NotFound` and no row is written.
    pub async fn create(&self, params: CreateDocumentParams) -> Result<Document, AppError> {
        let uploader = resolve_user(self.db, params.uploaded_by).await?;

        let document = DocumentRepository::new(self.db).create(params).await?;

        Ok(Document::from_entity(document, uploader))
    }

    pub async fn get_all(&self) -> Result<Vec<Document>, AppError> {
        let rows = DocumentRepository::new(self.db).get_all().await?;

        Ok(rows
            .into_iter()
            .map(|(document, uploader)| Document::from_entity(document, uploader))
            .collect())
    }
}
