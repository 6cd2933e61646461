use async_trait::async_trait;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::Pet;

/// Persistence for whole pet documents.
///
/// Toys are never stored on their own: every toy change is written by saving the
/// pet that owns it. There is no version check on `save`, so concurrent writers to
/// the same pet overwrite each other (last write wins).
#[async_trait]
pub trait PetStore: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Pet>, DatabaseError>;

    async fn insert(&self, pet: &Pet) -> Result<(), DatabaseError>;

    /// Replace the stored document. Fails with `NotFound` if the pet is gone.
    async fn save(&self, pet: &Pet) -> Result<(), DatabaseError>;

    async fn health_check(&self) -> Result<(), DatabaseError>;
}
