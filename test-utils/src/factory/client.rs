use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a client owned by the given organising profile.
pub async fn create_client(
    db: &DatabaseConnection,
    organisation_id: i32,
) -> Result<entity::client::Model, DbErr> {
    let id = next_id();
    entity::client::ActiveModel {
        name: ActiveValue::Set(format!("Client {}", id)),
        phone: ActiveValue::Set("555-0100".to_string()),
        address: ActiveValue::Set("1 Main St".to_string()),
        email: ActiveValue::Set(format!("client{}@example.com", id)),
        created_at: ActiveValue::Set(Utc::now()),
        organisation_id: ActiveValue::Set(organisation_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
