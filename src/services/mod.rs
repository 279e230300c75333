//! Business logic services.
//!
//! Each service wraps one repository handed to it at construction. Services
//! add update-merge semantics and transaction approval, log every call, and
//! return repository errors to the caller unchanged.

pub mod client_service;
pub mod product_service;
pub mod seller_service;
pub mod transaction_service;

pub use client_service::ClientService;
pub use product_service::ProductService;
pub use seller_service::SellerService;
pub use transaction_service::TransactionService;

#[cfg(test)]
pub(crate) mod test_support {
    use async_trait::async_trait;

    use crate::{error::AppError, models::Entity, repository::Repository};

    /// Repository whose every call fails, for checking error propagation.
    pub struct FailingRepository;

    fn offline() -> AppError {
        AppError::Unavailable("connection refused".to_string())
    }

    #[async_trait]
    impl<E: Entity> Repository<E> for FailingRepository {
        async fn insert(&self, _details: E::Details) -> Result<E, AppError> {
            Err(offline())
        }

        async fn save(&self, _record: E) -> Result<E, AppError> {
            Err(offline())
        }

        async fn find_all(&self) -> Result<Vec<E>, AppError> {
            Err(offline())
        }

        async fn find_by_id(&self, _id: i64) -> Result<Option<E>, AppError> {
            Err(offline())
        }

        async fn delete_by_id(&self, _id: i64) -> Result<(), AppError> {
            Err(offline())
        }
    }

    pub fn is_offline<T>(result: &Result<T, AppError>) -> bool {
        matches!(result, Err(AppError::Unavailable(msg)) if msg == "connection refused")
    }
}
