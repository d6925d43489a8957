use chrono::{DateTime, Utc};

use crate::{
    model::document::{CreateDocumentDto, DocumentDto},
    server::model::user::User,
};

/// Document record with its uploader resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub uploaded_at: DateTime<Utc>,
    pub uploaded_by: User,
    pub file_path: String,
}

impl Document {
    pub fn from_entity(document: entity::document::Model, uploader: entity::user::Model) -> Self {
        Self {
            id: document.id,
            title: document.title,
            description: document.description,
            uploaded_at: document.uploaded_at,
            uploaded_by: User::from_entity(uploader),
            file_path: document.file_path,
        }
    }

    pub fn into_dto(self) -> DocumentDto {
        DocumentDto {
            id: self.id,
            title: self.title,
            description: self.description,
            uploaded_at: self.uploaded_at,
            uploaded_by: self.uploaded_by.into_dto(),
            file_path: self.file_path,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateDocumentParams {
    pub title: String,
    pub description: String,
    pub uploaded_by: i32,
    pub file_path: String,
}

impl CreateDocumentParams {
    pub fn from_dto(dto: CreateDocumentDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            uploaded_by: dto.uploaded_by,
            file_path: dto.file_path,
        }
    }
}
