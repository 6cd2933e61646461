use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use super::error::{ResourceKind, ServiceError};
use super::guards::{require_found, require_ownership};
use crate::api::parse_resource;
use crate::config::ToyPolicy;
use crate::database::manager::DatabaseError;
use crate::database::models::{Pet, Toy, ToyChanges};
use crate::database::store::PetStore;

/// Create, update and delete toys inside a pet document.
///
/// Every operation is one read of the pet followed, on success, by one save of the
/// whole pet. Guards run between the two and abort before anything is changed.
/// Request bodies arrive raw and are only parsed once the guards have passed.
/// Nothing serializes concurrent operations on the same pet: the later save wins.
#[derive(Clone)]
pub struct ToyService {
    store: Arc<dyn PetStore>,
    policy: ToyPolicy,
}

impl ToyService {
    pub fn new(store: Arc<dyn PetStore>, policy: ToyPolicy) -> Self {
        Self { store, policy }
    }

    /// Append a toy and return the saved pet.
    ///
    /// `requester` is only consulted when the policy gates creation on ownership.
    pub async fn create_toy(
        &self,
        requester: Option<Uuid>,
        pet_id: Uuid,
        body: &[u8],
    ) -> Result<Pet, ServiceError> {
        let mut pet = self.load(pet_id).await?;

        if self.policy.require_owner_on_create {
            let requester = requester.ok_or(ServiceError::Unauthorized)?;
            require_ownership(requester, &pet)?;
        }

        let now = Utc::now();
        let toy = Toy::create(toy_changes(body)?, now)?;
        let toy_id = pet.push_toy(toy).id;
        pet.touch(now);

        self.persist(&pet).await?;
        info!(pet_id = %pet.id, toy_id = %toy_id, "toy created");
        Ok(pet)
    }

    /// Merge the supplied fields onto an existing toy.
    pub async fn update_toy(
        &self,
        requester: Uuid,
        pet_id: Uuid,
        toy_id: Uuid,
        body: &[u8],
    ) -> Result<(), ServiceError> {
        let mut pet = self.load(pet_id).await?;
        require_ownership(requester, &pet)?;

        let now = Utc::now();
        let toy = require_found(pet.toy_mut(toy_id), ResourceKind::Toy, toy_id)?;
        toy.apply(toy_changes(body)?, now)?;
        pet.touch(now);

        self.persist(&pet).await?;
        info!(pet_id = %pet.id, toy_id = %toy_id, "toy updated");
        Ok(())
    }

    pub async fn delete_toy(
        &self,
        requester: Uuid,
        pet_id: Uuid,
        toy_id: Uuid,
    ) -> Result<(), ServiceError> {
        let mut pet = self.load(pet_id).await?;
        require_ownership(requester, &pet)?;

        require_found(pet.remove_toy(toy_id), ResourceKind::Toy, toy_id)?;
        pet.touch(Utc::now());

        self.persist(&pet).await?;
        info!(pet_id = %pet.id, toy_id = %toy_id, "toy deleted");
        Ok(())
    }

    async fn load(&self, pet_id: Uuid) -> Result<Pet, ServiceError> {
        require_found(self.store.find_by_id(pet_id).await?, ResourceKind::Pet, pet_id)
    }

    /// A pet deleted between load and save is reported as missing.
    async fn persist(&self, pet: &Pet) -> Result<(), ServiceError> {
        self.store.save(pet).await.map_err(|e| match e {
            DatabaseError::NotFound(_) => ServiceError::not_found(ResourceKind::Pet, pet.id),
            other => ServiceError::Storage(other),
        })
    }
}

fn toy_changes(body: &[u8]) -> Result<ToyChanges, ServiceError> {
    let payload = parse_resource(body, "toy")?;
    Ok(ToyChanges::from_json(&payload)?)
}
