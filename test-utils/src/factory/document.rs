use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a document record uploaded by the given user.
pub async fn create_document(
    db: &DatabaseConnection,
    uploaded_by: i32,
) -> Result<entity::document::Model, DbErr> {
    let id = next_id();
    entity::document::ActiveModel {
        title: ActiveValue::Set(format!("Document {}", id)),
        description: ActiveValue::Set(String::new()),
        uploaded_at: ActiveValue::Set(Utc::now()),
        uploaded_by: ActiveValue::Set(uploaded_by),
        file_path: ActiveValue::Set(format!("documents/doc{}.pdf", id)),
        ..Default::default()
    }
    .insert(db)
    .await
}
