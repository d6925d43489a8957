use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub async fn create_policy(db: &DatabaseConnection) -> Result<entity::policy::Model, DbErr> {
    entity::policy::ActiveModel {
        title: ActiveValue::Set(format!("Policy {}", next_id())),
        content: ActiveValue::Set("Policy text".to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
