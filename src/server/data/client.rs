use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::client::CreateClientParams;

pub struct ClientRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClientRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateClientParams) -> Result<entity::client::Model, DbErr> {
        entity::client::ActiveModel {
            name: ActiveValue::Set(params.name),
            phone: ActiveValue::Set(params.phone),
            address: ActiveValue::Set(params.address),
            email: ActiveValue::Set(params.email),
            created_at: ActiveValue::Set(Utc::now()),
            organisation_id: ActiveValue::Set(params.organisation_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::client::Model>, DbErr> {
        entity::prelude::Client::find().all(self.db).await
    }
}
