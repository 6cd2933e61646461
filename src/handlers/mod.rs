// handlers/mod.rs - route handlers
//
// Public:    GET /, GET /health, GET /pets/:pet_id, POST /toys/:pet_id
// Protected: POST /pets, PATCH|DELETE /toys/:pet_id/:toy_id (bearer token required)
//
// POST /toys/:pet_id accepts an optional token; whether it is required is decided
// by the toy policy in the service, not by the router.

pub mod pets;
pub mod system;
pub mod toys;
