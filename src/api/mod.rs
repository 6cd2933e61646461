pub mod format;
pub mod payload;

pub use format::{pet_to_api_value, toy_to_api_value};
pub use payload::{parse_resource, remove_blanks, resource_object};
