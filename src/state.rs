//! Shared application state.
//!
//! Repositories are chosen once at startup and handed to each service's
//! constructor. Handlers get the services through axum's `State`.

use std::sync::Arc;

use crate::{
    db::DbPool,
    models::{Client, Product, Seller, Transaction},
    repository::{InMemoryRepository, PgRepository},
    services::{ClientService, ProductService, SellerService, TransactionService},
};

#[derive(Clone)]
pub struct AppState {
    pub clients: ClientService,
    pub products: ProductService,
    pub sellers: SellerService,
    pub transactions: TransactionService,

    /// Present only for the postgres backend; used by the health check.
    pub pool: Option<DbPool>,
}

impl AppState {
    /// Wire every service to one PostgreSQL-backed repository.
    pub fn postgres(pool: DbPool) -> Self {
        let repository = Arc::new(PgRepository::new(pool.clone()));

        Self {
            clients: ClientService::new(repository.clone()),
            products: ProductService::new(repository.clone()),
            sellers: SellerService::new(repository.clone()),
            transactions: TransactionService::new(repository),
            pool: Some(pool),
        }
    }

    /// Wire every service to its own empty in-memory repository.
    pub fn in_memory() -> Self {
        Self {
            clients: ClientService::new(Arc::new(InMemoryRepository::<Client>::new())),
            products: ProductService::new(Arc::new(InMemoryRepository::<Product>::new())),
            sellers: SellerService::new(Arc::new(InMemoryRepository::<Seller>::new())),
            transactions: TransactionService::new(Arc::new(
                InMemoryRepository::<Transaction>::new(),
            )),
            pool: None,
        }
    }
}
