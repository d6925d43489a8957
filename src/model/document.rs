use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DocumentDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub uploaded_at: DateTime<Utc>,
    pub uploaded_by: UserDto,
    /// Reference path into the external file store.
    pub file_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateDocumentDto {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub uploaded_by: i32,
    pub file_path: String,
}
