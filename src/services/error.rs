use std::fmt;
use thiserror::Error;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::ValidationErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Pet,
    Toy,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Pet => f.write_str("pet"),
            ResourceKind::Toy => f.write_str("toy"),
        }
    }
}

/// Failures of pet and toy operations
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{kind} {id} not found")]
    NotFound { kind: ResourceKind, id: String },

    #[error("requester does not own pet {pet_id}")]
    Forbidden { pet_id: Uuid },

    #[error("authentication required")]
    Unauthorized,

    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("storage error: {0}")]
    Storage(#[from] DatabaseError),
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        ServiceError::Validation(errors)
    }
}

impl ServiceError {
    pub fn not_found(kind: ResourceKind, id: impl fmt::Display) -> Self {
        ServiceError::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}
