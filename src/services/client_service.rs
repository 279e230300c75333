//! Client service.
//!
//! Thin mediation over the client repository. The service does not validate
//! fields; it only merges updates and reports missing ids.

use std::sync::Arc;

use crate::{
    error::AppError,
    models::{Client, ClientDetails, Entity},
    repository::Repository,
};

#[derive(Clone)]
pub struct ClientService {
    repository: Arc<dyn Repository<Client>>,
}

impl ClientService {
    pub fn new(repository: Arc<dyn Repository<Client>>) -> Self {
        Self { repository }
    }

    /// Persist a new client and return it with its assigned id.
    pub async fn create(&self, details: ClientDetails) -> Result<Client, AppError> {
        tracing::debug!("Creating client with details: {:?}", details);

        let client = self
            .repository
            .insert(details)
            .await
            .inspect_err(|e| tracing::error!("Error creating client: {}", e))?;

        tracing::debug!("Client created successfully: {:?}", client);
        Ok(client)
    }

    pub async fn get_all(&self) -> Result<Vec<Client>, AppError> {
        tracing::debug!("Retrieving all clients");

        let clients = self
            .repository
            .find_all()
            .await
            .inspect_err(|e| tracing::error!("Error retrieving clients: {}", e))?;

        tracing::debug!("Retrieved {} clients", clients.len());
        Ok(clients)
    }

    /// Look up a client. A missing id is `Ok(None)`, not an error.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Client>, AppError> {
        tracing::debug!("Retrieving client by id: {}", id);

        self.repository
            .find_by_id(id)
            .await
            .inspect_err(|e| tracing::error!("Error retrieving client by id: {}", e))
    }

    /// Overwrite name and email of an existing client.
    ///
    /// # Errors
    ///
    /// - `NotFound`: no client with this id
    pub async fn update(&self, id: i64, details: ClientDetails) -> Result<Client, AppError> {
        tracing::debug!("Updating client with id: {}", id);

        let result: Result<Client, AppError> = async {
            let mut client = self
                .repository
                .find_by_id(id)
                .await?
                .ok_or_else(|| AppError::not_found(Client::KIND, id))?;
            client.apply(details);
            self.repository.save(client).await
        }
        .await;

        let client = result.inspect_err(|e| tracing::error!("Error updating client: {}", e))?;
        tracing::debug!("Client updated successfully: {:?}", client);
        Ok(client)
    }

    /// Remove a client. Missing ids are reported by the repository as `NotFound`.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        tracing::debug!("Deleting client with id: {}", id);

        self.repository
            .delete_by_id(id)
            .await
            .inspect_err(|e| tracing::error!("Error deleting client: {}", e))?;

        tracing::debug!("Client {} deleted successfully", id);
        Ok(())
    }
}
