use chrono::Utc;
use serde_json::{Map, Value};
use std::sync::Arc;
use uuid::Uuid;

use super::error::{ResourceKind, ServiceError};
use super::guards::require_found;
use crate::database::models::{NewPet, Pet};
use crate::database::store::PetStore;

/// The small slice of pet handling the toy endpoints need around them.
#[derive(Clone)]
pub struct PetService {
    store: Arc<dyn PetStore>,
}

impl PetService {
    pub fn new(store: Arc<dyn PetStore>) -> Self {
        Self { store }
    }

    /// Create a pet owned by `owner`, starting with no toys.
    pub async fn create_pet(&self, owner: Uuid, payload: &Map<String, Value>) -> Result<Pet, ServiceError> {
        let new_pet = NewPet::from_json(payload)?;
        let pet = Pet::create(new_pet, Some(owner), Utc::now());
        self.store.insert(&pet).await?;
        tracing::info!(pet_id = %pet.id, owner = %owner, "pet created");
        Ok(pet)
    }

    pub async fn show_pet(&self, pet_id: Uuid) -> Result<Pet, ServiceError> {
        require_found(self.store.find_by_id(pet_id).await?, ResourceKind::Pet, pet_id)
    }

    pub async fn health_check(&self) -> Result<(), ServiceError> {
        Ok(self.store.health_check().await?)
    }
}
