pub mod auth;
pub mod response;

pub use auth::{optional_token, require_token, AuthUser};
pub use response::{ApiResponse, ApiResult};
