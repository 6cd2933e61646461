pub mod manager;
pub mod memory;
pub mod models;
pub mod repository;
pub mod store;

pub use manager::{DatabaseError, DatabaseManager};
pub use memory::MemoryPetStore;
pub use repository::PgPetStore;
pub use store::PetStore;
