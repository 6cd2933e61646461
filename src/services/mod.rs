pub mod error;
pub mod guards;
pub mod pet_service;
pub mod toy_service;

pub use error::{ResourceKind, ServiceError};
pub use pet_service::PetService;
pub use toy_service::ToyService;
