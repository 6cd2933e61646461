use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::Pet;
use crate::database::store::PetStore;

/// In-process pet store used by the test suites and for local runs without PostgreSQL.
#[derive(Default)]
pub struct MemoryPetStore {
    pets: RwLock<HashMap<Uuid, Pet>>,
    unavailable: AtomicBool,
    saves: AtomicUsize,
}

impl MemoryPetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate an unreachable backend: every call fails with a connection error.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of successful `save` calls so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub async fn len(&self) -> usize {
        self.pets.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.pets.read().await.is_empty()
    }

    fn check_available(&self) -> Result<(), DatabaseError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DatabaseError::ConnectionError("memory store unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl PetStore for MemoryPetStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Pet>, DatabaseError> {
        self.check_available()?;
        Ok(self.pets.read().await.get(&id).cloned())
    }

    async fn insert(&self, pet: &Pet) -> Result<(), DatabaseError> {
        self.check_available()?;
        let mut pets = self.pets.write().await;
        if pets.contains_key(&pet.id) {
            return Err(DatabaseError::QueryError(format!("duplicate pet id {}", pet.id)));
        }
        pets.insert(pet.id, pet.clone());
        Ok(())
    }

    async fn save(&self, pet: &Pet) -> Result<(), DatabaseError> {
        self.check_available()?;
        let mut pets = self.pets.write().await;
        match pets.get_mut(&pet.id) {
            Some(stored) => {
                *stored = pet.clone();
                self.saves.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
            None => Err(DatabaseError::NotFound(format!("pet {}", pet.id))),
        }
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        self.check_available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::NewPet;
    use chrono::Utc;

    fn rex() -> Pet {
        Pet::create(
            NewPet {
                name: "Rex".into(),
                kind: "dog".into(),
                age: 3.0,
                adoptable: true,
            },
            Some(Uuid::new_v4()),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn insert_then_find() {
        let store = MemoryPetStore::new();
        let pet = rex();
        store.insert(&pet).await.unwrap();

        assert_eq!(store.find_by_id(pet.id).await.unwrap(), Some(pet));
        assert_eq!(store.find_by_id(Uuid::new_v4()).await.unwrap(), None);
        assert!(store.insert(&rex()).await.is_ok());
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn save_replaces_whole_document() {
        let store = MemoryPetStore::new();
        let mut pet = rex();
        store.insert(&pet).await.unwrap();

        pet.name = "Rexy".into();
        store.save(&pet).await.unwrap();
        assert_eq!(store.find_by_id(pet.id).await.unwrap().unwrap().name, "Rexy");
        assert_eq!(store.save_count(), 1);
    }

    #[tokio::test]
    async fn save_of_missing_pet_is_not_found() {
        let store = MemoryPetStore::new();
        let err = store.save(&rex()).await.unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound(_)));
    }

    #[tokio::test]
    async fn unavailable_store_fails_every_call() {
        let store = MemoryPetStore::new();
        store.set_unavailable(true);
        assert!(matches!(
            store.find_by_id(Uuid::new_v4()).await,
            Err(DatabaseError::ConnectionError(_))
        ));
        assert!(store.health_check().await.is_err());

        store.set_unavailable(false);
        assert!(store.health_check().await.is_ok());
    }
}
