//! Persistence collaborators.
//!
//! Services only see `Repository<E>`. Two implementations exist:
//! - `PgRepository`: PostgreSQL through sqlx
//! - `InMemoryRepository`: process-local maps, used by tests and the `memory` backend

use async_trait::async_trait;

use crate::{error::AppError, models::Entity};

pub mod memory;
pub mod postgres;

pub use memory::InMemoryRepository;
pub use postgres::PgRepository;

/// Storage primitives for one entity type.
///
/// Implementations must give read-after-write consistency for a single record.
/// Ordering of `find_all` is implementation-defined.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Store a new record and return it with its assigned id.
    async fn insert(&self, details: E::Details) -> Result<E, AppError>;

    /// Write back a record that already has an id.
    ///
    /// Fails with `NotFound` if the id is no longer stored.
    async fn save(&self, record: E) -> Result<E, AppError>;

    async fn find_all(&self) -> Result<Vec<E>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<E>, AppError>;

    /// Fails with `NotFound` if nothing was deleted.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}
