//! Product service.
//!
//! Same contract as the client service. `update` replaces name, price and
//! stock; no bounds are checked, so negative prices or stock are stored as is.

use std::sync::Arc;

use crate::{
    error::AppError,
    models::{Entity, Product, ProductDetails},
    repository::Repository,
};

#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn Repository<Product>>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn Repository<Product>>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, details: ProductDetails) -> Result<Product, AppError> {
        tracing::debug!("Creating product with details: {:?}", details);

        let product = self
            .repository
            .insert(details)
            .await
            .inspect_err(|e| tracing::error!("Error creating product: {}", e))?;

        tracing::debug!("Product created successfully: {:?}", product);
        Ok(product)
    }

    pub async fn get_all(&self) -> Result<Vec<Product>, AppError> {
        tracing::debug!("Retrieving all products");

        let products = self
            .repository
            .find_all()
            .await
            .inspect_err(|e| tracing::error!("Error retrieving products: {}", e))?;

        tracing::debug!("Retrieved {} products", products.len());
        Ok(products)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        tracing::debug!("Retrieving product by id: {}", id);

        self.repository
            .find_by_id(id)
            .await
            .inspect_err(|e| tracing::error!("Error retrieving product by id: {}", e))
    }

    /// Overwrite name, price and stock of an existing product.
    ///
    /// # Errors
    ///
    /// - `NotFound`: no product with this id
    pub async fn update(&self, id: i64, details: ProductDetails) -> Result<Product, AppError> {
        tracing::debug!("Updating product with id: {}", id);

        let result: Result<Product, AppError> = async {
            let mut product = self
                .repository
                .find_by_id(id)
                .await?
                .ok_or_else(|| AppError::not_found(Product::KIND, id))?;
            product.apply(details);
            self.repository.save(product).await
        }
        .await;

        let product = result.inspect_err(|e| tracing::error!("Error updating product: {}", e))?;
        tracing::debug!("Product updated successfully: {:?}", product);
        Ok(product)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        tracing::debug!("Deleting product with id: {}", id);

        self.repository
            .delete_by_id(id)
            .await
            .inspect_err(|e| tracing::error!("Error deleting product: {}", e))?;

        tracing::debug!("Product {} deleted successfully", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        repository::InMemoryRepository,
        services::test_support::{FailingRepository, is_offline},
    };

    fn service() -> ProductService {
        ProductService::new(Arc::new(InMemoryRepository::<Product>::new()))
    }

    fn details(name: &str, price: f64, stock: i32) -> ProductDetails {
        ProductDetails {
            name: name.to_string(),
            price,
            stock,
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let service = service();

        let created = service.create(details("Product 1", 10.0, 100)).await.unwrap();
        assert_eq!(created.name, "Product 1");
        assert_eq!(created.price, 10.0);
        assert_eq!(created.stock, 100);

        assert_eq!(service.get_by_id(created.id).await.unwrap(), Some(created));
    }

    #[tokio::test]
    async fn get_all_returns_every_product() {
        let service = service();
        service.create(details("Product 1", 10.0, 100)).await.unwrap();
        service.create(details("Product 2", 20.0, 200)).await.unwrap();

        let products = service.get_all().await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].stock, 200);
    }

    #[tokio::test]
    async fn update_replaces_name_price_and_stock() {
        let service = service();
        let created = service.create(details("Product", 10.0, 100)).await.unwrap();

        let updated = service
            .update(created.id, details("Updated Product", 20.0, 200))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Updated Product");
        assert_eq!(updated.price, 20.0);
        assert_eq!(updated.stock, 200);
        assert_eq!(service.get_by_id(created.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn negative_price_and_stock_are_stored() {
        let service = service();
        let created = service.create(details("Refund", -5.5, -3)).await.unwrap();

        assert_eq!(created.price, -5.5);
        assert_eq!(created.stock, -3);
    }

    #[tokio::test]
    async fn unknown_id_is_absent_for_get_and_not_found_for_writes() {
        let service = service();

        assert_eq!(service.get_by_id(999).await.unwrap(), None);
        assert!(matches!(
            service.update(999, details("x", 1.0, 1)).await,
            Err(AppError::NotFound { entity: "Product", id: 999 })
        ));
        assert!(matches!(
            service.delete(999).await,
            Err(AppError::NotFound { entity: "Product", id: 999 })
        ));
    }

    #[tokio::test]
    async fn repository_failures_propagate() {
        let service = ProductService::new(Arc::new(FailingRepository));

        assert!(is_offline(&service.create(details("x", 1.0, 1)).await));
        assert!(is_offline(&service.get_all().await));
        assert!(is_offline(&service.update(1, details("x", 1.0, 1)).await));
        assert!(is_offline(&service.delete(1).await));
    }
}
