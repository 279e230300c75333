//! Transaction service - recording sales and approving them.
//!
//! This service handles:
//! - Recording transactions exactly as submitted
//! - Lookups by id and listing
//! - The one state transition in the system, `Pending → Approved`
//!
//! # Referential Integrity
//!
//! Client, product and seller ids are stored without checking that they
//! exist. Whatever the storage layer enforces is all there is.

use std::sync::Arc;

use crate::{
    error::AppError,
    models::{Entity, Transaction, TransactionDetails},
    repository::Repository,
};

#[derive(Clone)]
pub struct TransactionService {
    repository: Arc<dyn Repository<Transaction>>,
}

impl TransactionService {
    pub fn new(repository: Arc<dyn Repository<Transaction>>) -> Self {
        Self { repository }
    }

    /// Record a transaction.
    ///
    /// The `approved` flag is stored as supplied, so a transaction may be
    /// created already approved.
    pub async fn create(&self, details: TransactionDetails) -> Result<Transaction, AppError> {
        tracing::debug!("Creating transaction with details: {:?}", details);

        let transaction = self
            .repository
            .insert(details)
            .await
            .inspect_err(|e| tracing::error!("Error creating transaction: {}", e))?;

        tracing::debug!("Transaction created successfully: {:?}", transaction);
        Ok(transaction)
    }

    pub async fn get_all(&self) -> Result<Vec<Transaction>, AppError> {
        tracing::debug!("Retrieving all transactions");

        let transactions = self
            .repository
            .find_all()
            .await
            .inspect_err(|e| tracing::error!("Error retrieving transactions: {}", e))?;

        tracing::debug!("Retrieved {} transactions", transactions.len());
        Ok(transactions)
    }

    /// Get transaction by ID. A missing id is `Ok(None)`.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Transaction>, AppError> {
        tracing::debug!("Retrieving transaction by id: {}", id);

        self.repository
            .find_by_id(id)
            .await
            .inspect_err(|e| tracing::error!("Error retrieving transaction by id: {}", e))
    }

    /// Approve a transaction.
    ///
    /// # Process
    ///
    /// 1. Load the transaction
    /// 2. Set `approved = true` (already-approved records stay as they are)
    /// 3. Write it back
    ///
    /// No lock is taken between the read and the write; concurrent callers
    /// race and the last write wins.
    ///
    /// # Errors
    ///
    /// - `NotFound`: no transaction with this id
    /// - any storage error, unchanged
    pub async fn approve(&self, id: i64) -> Result<Transaction, AppError> {
        tracing::debug!("Approving transaction with id: {}", id);

        let result: Result<Transaction, AppError> = async {
            let mut transaction = self
                .repository
                .find_by_id(id)
                .await?
                .ok_or_else(|| AppError::not_found(Transaction::KIND, id))?;
            transaction.approve();
            self.repository.save(transaction).await
        }
        .await;

        let transaction =
            result.inspect_err(|e| tracing::error!("Error approving transaction: {}", e))?;
        tracing::debug!("Transaction approved successfully: {:?}", transaction);
        Ok(transaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::TransactionStatus,
        repository::InMemoryRepository,
        services::test_support::{FailingRepository, is_offline},
    };

    fn service() -> TransactionService {
        TransactionService::new(Arc::new(InMemoryRepository::<Transaction>::new()))
    }

    fn sale(quantity: i32, approved: bool) -> TransactionDetails {
        TransactionDetails {
            client_id: 1,
            product_id: 1,
            seller_id: 1,
            quantity,
            date: Some("2024-06-11T12:00:00".parse().unwrap()),
            approved,
        }
    }

    #[tokio::test]
    async fn create_stores_transaction_as_given() {
        let service = service();

        let created = service.create(sale(1, false)).await.unwrap();

        assert_eq!(created.quantity, 1);
        assert!(!created.approved);
        assert_eq!(created.status(), TransactionStatus::Pending);
        assert_eq!(service.get_by_id(created.id).await.unwrap(), Some(created));
    }

    #[tokio::test]
    async fn create_keeps_supplied_approved_flag() {
        let created = service().create(sale(2, true)).await.unwrap();
        assert!(created.approved);
    }

    #[tokio::test]
    async fn create_accepts_dangling_references() {
        let details = TransactionDetails {
            client_id: 404,
            product_id: 405,
            seller_id: 406,
            ..sale(1, false)
        };

        let created = service().create(details).await.unwrap();
        assert_eq!(created.client_id, 404);
    }

    #[tokio::test]
    async fn approve_sets_flag_and_leaves_other_fields() {
        let service = service();
        let created = service.create(sale(1, false)).await.unwrap();

        let approved = service.approve(created.id).await.unwrap();

        assert!(approved.approved);
        assert_eq!(
            approved,
            Transaction {
                approved: true,
                ..created.clone()
            }
        );
        assert_eq!(
            service.get_by_id(created.id).await.unwrap(),
            Some(approved)
        );
    }

    #[tokio::test]
    async fn undated_transaction_can_be_created_and_approved() {
        let service = service();
        let created = service
            .create(TransactionDetails {
                date: None,
                ..sale(1, false)
            })
            .await
            .unwrap();
        assert_eq!(created.date, None);

        let approved = service.approve(created.id).await.unwrap();

        assert!(approved.approved);
        assert_eq!(approved.date, None);
        assert_eq!(approved.quantity, 1);
    }

    #[tokio::test]
    async fn approving_twice_is_a_no_op() {
        let service = service();
        let created = service.create(sale(1, false)).await.unwrap();

        let first = service.approve(created.id).await.unwrap();
        let second = service.approve(created.id).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(second.status(), TransactionStatus::Approved);
    }

    #[tokio::test]
    async fn approve_unknown_id_is_not_found() {
        assert!(matches!(
            service().approve(999).await,
            Err(AppError::NotFound { entity: "Transaction", id: 999 })
        ));
    }

    #[tokio::test]
    async fn get_all_lists_transactions() {
        let service = service();
        service.create(sale(1, false)).await.unwrap();
        service.create(sale(2, true)).await.unwrap();

        let quantities: Vec<_> = service
            .get_all()
            .await
            .unwrap()
            .iter()
            .map(|t| t.quantity)
            .collect();
        assert_eq!(quantities, [1, 2]);
    }

    #[tokio::test]
    async fn repository_failures_propagate() {
        let service = TransactionService::new(Arc::new(FailingRepository));

        assert!(is_offline(&service.create(sale(1, false)).await));
        assert!(is_offline(&service.get_all().await));
        assert!(is_offline(&service.get_by_id(1).await));
        assert!(is_offline(&service.approve(1).await));
    }
}
