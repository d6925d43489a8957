use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClientDto {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    /// Profile id of the organising user.
    pub organisation_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateClientDto {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub email: String,
    pub organisation_id: i32,
}
