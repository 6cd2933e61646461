//! Precondition checks run before any pet or toy is mutated.
//!
//! Order matters: existence first, then ownership, then the mutation itself.

use std::fmt::Display;
use uuid::Uuid;

use super::error::{ResourceKind, ServiceError};
use crate::database::models::Pet;

/// Pass a lookup result through, or fail with `NotFound` for `kind`/`id`.
pub fn require_found<T>(value: Option<T>, kind: ResourceKind, id: impl Display) -> Result<T, ServiceError> {
    value.ok_or_else(|| ServiceError::not_found(kind, id))
}

/// The requester must be the pet's recorded owner. Unowned pets belong to nobody.
pub fn require_ownership(requester: Uuid, pet: &Pet) -> Result<(), ServiceError> {
    if pet.is_owned_by(requester) {
        Ok(())
    } else {
        tracing::warn!(pet_id = %pet.id, requester = %requester, "ownership check failed");
        Err(ServiceError::Forbidden { pet_id: pet.id })
    }
}

/// Identifiers that are not UUIDs can never resolve, so they are reported as missing.
pub fn parse_id(raw: &str, kind: ResourceKind) -> Result<Uuid, ServiceError> {
    Uuid::parse_str(raw).map_err(|_| ServiceError::not_found(kind, raw))
}
