use sea_orm::DatabaseConnection;

use crate::server::{
    data::{client::ClientRepository, user::UserRepository},
    error::AppError,
    model::client::{Client, CreateClientParams},
};

pub struct ClientService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClientService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a client owned by an organising profile.
    ///
    /// Fails with `NotFound` if the referenced profile does not exist.
    pub async fn create(&self, params: CreateClientParams) -> Result<Client, AppError> {
        let user_repo = UserRepository::new(self.db);
        if user_repo
            .find_profile_by_id(params.organisation_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Profile {} not found",
                params.organisation_id
            )));
        }

        let client = ClientRepository::new(self.db).create(params).await?;

        Ok(Client::from_entity(client))
    }

    pub async fn get_all(&self) -> Result<Vec<Client>, AppError> {
        let clients = ClientRepository::new(self.db).get_all().await?;

        Ok(clients.into_iter().map(Client::from_entity).collect())
    }
}
