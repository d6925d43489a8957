use chrono::{DateTime, Utc};

use crate::model::client::{ClientDto, CreateClientDto};

/// Client record owned by an organising profile.
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub organisation_id: i32,
}

impl Client {
    pub fn from_entity(entity: entity::client::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            phone: entity.phone,
            address: entity.address,
            email: entity.email,
            created_at: entity.created_at,
            organisation_id: entity.organisation_id,
        }
    }

    pub fn into_dto(self) -> ClientDto {
        ClientDto {
            id: self.id,
            name: self.name,
            phone: self.phone,
            address: self.address,
            email: self.email,
            created_at: self.created_at,
            organisation_id: self.organisation_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateClientParams {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub email: String,
    pub organisation_id: i32,
}

impl CreateClientParams {
    pub fn from_dto(dto: CreateClientDto) -> Self {
        Self {
            name: dto.name,
            phone: dto.phone,
            address: dto.address,
            email: dto.email,
            organisation_id: dto.organisation_id,
        }
    }
}
