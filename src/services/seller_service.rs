//! Seller service. Shares the client service's contract.

use std::sync::Arc;

use crate::{
    error::AppError,
    models::{Entity, Seller, SellerDetails},
    repository::Repository,
};

#[derive(Clone)]
pub struct SellerService {
    repository: Arc<dyn Repository<Seller>>,
}

impl SellerService {
    pub fn new(repository: Arc<dyn Repository<Seller>>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, details: SellerDetails) -> Result<Seller, AppError> {
        tracing::debug!("Creating seller with details: {:?}", details);

        let seller = self
            .repository
            .insert(details)
            .await
            .inspect_err(|e| tracing::error!("Error creating seller: {}", e))?;

        tracing::debug!("Seller created successfully: {:?}", seller);
        Ok(seller)
    }

    pub async fn get_all(&self) -> Result<Vec<Seller>, AppError> {
        tracing::debug!("Retrieving all sellers");

        let sellers = self
            .repository
            .find_all()
            .await
            .inspect_err(|e| tracing::error!("Error retrieving sellers: {}", e))?;

        tracing::debug!("Retrieved {} sellers", sellers.len());
        Ok(sellers)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Seller>, AppError> {
        tracing::debug!("Retrieving seller by id: {}", id);

        self.repository
            .find_by_id(id)
            .await
            .inspect_err(|e| tracing::error!("Error retrieving seller by id: {}", e))
    }

    pub async fn update(&self, id: i64, details: SellerDetails) -> Result<Seller, AppError> {
        tracing::debug!("Updating seller with id: {}", id);

        let result: Result<Seller, AppError> = async {
            let mut seller = self
                .repository
                .find_by_id(id)
                .await?
                .ok_or_else(|| AppError::not_found(Seller::KIND, id))?;
            seller.apply(details);
            self.repository.save(seller).await
        }
        .await;

        let seller = result.inspect_err(|e| tracing::error!("Error updating seller: {}", e))?;
        tracing::debug!("Seller updated successfully: {:?}", seller);
        Ok(seller)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        tracing::debug!("Deleting seller with id: {}", id);

        self.repository
            .delete_by_id(id)
            .await
            .inspect_err(|e| tracing::error!("Error deleting seller: {}", e))?;

        tracing::debug!("Seller {} deleted successfully", id);
        Ok(())
    }
}
