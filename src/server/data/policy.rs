use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::hr::CreatePolicyParams;

pub struct PolicyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PolicyRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreatePolicyParams) -> Result<entity::policy::Model, DbErr> {
        entity::policy::ActiveModel {
            title: ActiveValue::Set(params.title),
            content: ActiveValue::Set(params.content),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::policy::Model>, DbErr> {
        entity::prelude::Policy::find().all(self.db).await
    }
}
