use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::document::CreateDocumentParams;

pub struct DocumentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DocumentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateDocumentParams,
    ) -> Result<entity::document::Model, DbErr> {
        entity::document::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            uploaded_at: ActiveValue::Set(Utc::now()),
            uploaded_by: ActiveValue::Set(params.uploaded_by),
            file_path: ActiveValue::Set(params.file_path),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all documents with their uploader resolved.
    pub async fn get_all(
        &self,
    ) -> Result<Vec<(entity::document::Model, entity::user::Model)>, DbErr> {
        let rows = entity::prelude::Document::find()
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(document, uploader)| {
                let uploader = uploader.ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Uploader of document {} not found",
                        document.id
                    ))
                })?;
                Ok((document, uploader))
            })
            .collect()
    }
}
