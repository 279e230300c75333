//! In-memory repository.
//!
//! Records live in a `BTreeMap` behind a mutex, so `find_all` returns them in
//! ascending id order. Ids start at 1 and are never reused.

use std::{
    collections::BTreeMap,
    sync::{Mutex, MutexGuard},
};

use async_trait::async_trait;

use super::Repository;
use crate::{error::AppError, models::Entity};

struct Store<E> {
    next_id: i64,
    records: BTreeMap<i64, E>,
}

pub struct InMemoryRepository<E> {
    store: Mutex<Store<E>>,
}

impl<E> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(Store {
                next_id: 1,
                records: BTreeMap::new(),
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store<E>>, AppError> {
        self.store
            .lock()
            .map_err(|_| AppError::Unavailable("in-memory store lock poisoned".to_string()))
    }
}

impl<E> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    async fn insert(&self, details: E::Details) -> Result<E, AppError> {
        let mut store = self.lock()?;
        let id = store.next_id;
        store.next_id += 1;

        let record = E::from_details(id, details);
        store.records.insert(id, record.clone());
        Ok(record)
    }

    async fn save(&self, record: E) -> Result<E, AppError> {
        let mut store = self.lock()?;
        match store.records.get_mut(&record.id()) {
            Some(slot) => {
                *slot = record.clone();
                Ok(record)
            }
            None => Err(AppError::not_found(E::KIND, record.id())),
        }
    }

    async fn find_all(&self) -> Result<Vec<E>, AppError> {
        Ok(self.lock()?.records.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<E>, AppError> {
        Ok(self.lock()?.records.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.lock()?
            .records
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(E::KIND, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Client, ClientDetails};

    fn details(name: &str) -> ClientDetails {
        ClientDetails {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
        }
    }

    #[tokio::test]
    async fn ids_are_fresh_and_not_reused_after_delete() {
        let repo = InMemoryRepository::<Client>::new();

        let first = repo.insert(details("Ada")).await.unwrap();
        let second = repo.insert(details("Grace")).await.unwrap();
        repo.delete_by_id(second.id).await.unwrap();
        let third = repo.insert(details("Edsger")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn find_all_is_ordered_by_id() {
        let repo = InMemoryRepository::<Client>::new();
        for name in ["C", "A", "B"] {
            repo.insert(details(name)).await.unwrap();
        }

        let names: Vec<_> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, ["C", "A", "B"]);
    }

    #[tokio::test]
    async fn save_and_delete_of_unknown_id_fail_with_not_found() {
        let repo = InMemoryRepository::<Client>::new();
        let ghost = Client::from_details(42, details("Ghost"));

        assert!(matches!(
            repo.save(ghost).await,
            Err(AppError::NotFound { entity: "Client", id: 42 })
        ));
        assert!(matches!(
            repo.delete_by_id(42).await,
            Err(AppError::NotFound { entity: "Client", id: 42 })
        ));
    }
}
